//! Board Entity
//!
//! A board belongs to an organization and holds ordered columns of cards.

use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// A kanban board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    /// Unique identifier
    pub id: u32,
    /// Owning organization
    pub organization_id: u32,
    /// Board title
    pub title: String,
    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
}

impl Board {
    pub fn new(id: u32, organization_id: u32, title: String) -> Self {
        Self {
            id,
            organization_id,
            title,
            created_at: None,
            updated_at: None,
        }
    }
}

impl Entity for Board {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}
