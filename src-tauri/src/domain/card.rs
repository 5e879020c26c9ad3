//! Card Entity
//!
//! The movable unit of work. A card belongs to exactly one column and
//! carries a zero-based position within it; after every persisted move the
//! positions inside a column form a contiguous 0..n-1 sequence.

use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// A kanban card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Unique identifier
    pub id: u32,
    /// Column currently containing the card
    pub column_id: u32,
    /// Owning board (denormalized for single-query board loads)
    pub board_id: u32,
    /// Card title
    pub title: String,
    /// Optional description (Markdown content)
    pub description: Option<String>,
    /// Optional due date (ISO date string, e.g. "2026-08-07")
    pub due_date: Option<String>,
    /// Position within the column (for ordering)
    pub position: i32,
    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
}

impl Card {
    /// Create a new card with default payload
    pub fn new(id: u32, column_id: u32, board_id: u32, title: String) -> Self {
        Self {
            id,
            column_id,
            board_id,
            title,
            description: None,
            due_date: None,
            position: 0,
            created_at: None,
            updated_at: None,
        }
    }
}

impl Entity for Card {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// A card's new column/position assignment, as computed by the frontend
/// reorder engine. `move_card` applies a batch of these in one transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardPlacement {
    pub card_id: u32,
    pub column_id: u32,
    pub position: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_creation() {
        let card = Card::new(1, 2, 3, "Write docs".to_string());
        assert_eq!(card.id(), 1);
        assert_eq!(card.column_id, 2);
        assert_eq!(card.board_id, 3);
        assert!(card.description.is_none());
        assert_eq!(card.position, 0);
    }
}
