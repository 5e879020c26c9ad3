//! Frontend Models
//!
//! Data structures matching backend entities.

use serde::{Deserialize, Serialize};

/// Organization data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    pub id: u32,
    pub name: String,
}

/// Board data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub id: u32,
    pub organization_id: u32,
    pub title: String,
    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
}

/// Column data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub id: u32,
    pub board_id: u32,
    pub title: String,
    pub position: i32,
    pub created_at: Option<i64>,
}

/// Card data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: u32,
    pub column_id: u32,
    pub board_id: u32,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<String>,
    pub position: i32,
    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
}

/// A card's new column/position assignment, as computed by the reorder
/// engine and persisted by `move_card`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardPlacement {
    pub card_id: u32,
    pub column_id: u32,
    pub position: i32,
}

/// Card history entry (matches backend; action is one of
/// "created" | "moved" | "reordered" | "updated" | "deleted")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardHistory {
    pub id: u32,
    pub card_id: u32,
    pub action: String,
    pub from_column_id: Option<u32>,
    pub to_column_id: Option<u32>,
    pub changes: Option<String>,
    pub created_at: Option<i64>,
}
