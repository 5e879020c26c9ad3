//! Card History Entity
//!
//! Append-only audit trail of card mutations.

use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// What happened to a card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryAction {
    /// Card created in a column
    Created,
    /// Card moved to a different column
    Moved,
    /// Card repositioned within its column
    Reordered,
    /// Payload fields changed (title, description, due date)
    Updated,
    /// Card deleted
    Deleted,
}

impl HistoryAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            HistoryAction::Created => "created",
            HistoryAction::Moved => "moved",
            HistoryAction::Reordered => "reordered",
            HistoryAction::Updated => "updated",
            HistoryAction::Deleted => "deleted",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "moved" => HistoryAction::Moved,
            "reordered" => HistoryAction::Reordered,
            "updated" => HistoryAction::Updated,
            "deleted" => HistoryAction::Deleted,
            _ => HistoryAction::Created,
        }
    }
}

/// One audit entry for a card mutation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardHistory {
    /// Unique identifier
    pub id: u32,
    /// The card this entry belongs to
    pub card_id: u32,
    pub action: HistoryAction,
    /// Column the card left (moved/deleted)
    pub from_column_id: Option<u32>,
    /// Column the card entered (created/moved)
    pub to_column_id: Option<u32>,
    /// JSON blob of changed payload fields (updated)
    pub changes: Option<String>,
    pub created_at: Option<i64>,
}

impl CardHistory {
    pub fn new(id: u32, card_id: u32, action: HistoryAction) -> Self {
        Self {
            id,
            card_id,
            action,
            from_column_id: None,
            to_column_id: None,
            changes: None,
            created_at: None,
        }
    }
}

impl Entity for CardHistory {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_round_trip() {
        assert_eq!(HistoryAction::Moved.as_str(), "moved");
        assert_eq!(HistoryAction::from_str("reordered"), HistoryAction::Reordered);
        assert_eq!(HistoryAction::from_str("unknown"), HistoryAction::Created);
    }
}
