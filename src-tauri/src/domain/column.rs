//! Column Entity
//!
//! An ordered bucket of cards within a board. Column positions within a
//! board are kept contiguous (0, 1, 2, ..).

use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// A board column (e.g. "To Do")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Unique identifier
    pub id: u32,
    /// Owning board
    pub board_id: u32,
    /// Column title
    pub title: String,
    /// Position within the board (for ordering)
    pub position: i32,
    pub created_at: Option<i64>,
}

impl Column {
    pub fn new(id: u32, board_id: u32, title: String, position: i32) -> Self {
        Self {
            id,
            board_id,
            title,
            position,
            created_at: None,
        }
    }
}

impl Entity for Column {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_creation() {
        let column = Column::new(1, 1, "To Do".to_string(), 0);
        assert_eq!(column.id(), 1);
        assert_eq!(column.title, "To Do");
        assert_eq!(column.position, 0);
    }
}
