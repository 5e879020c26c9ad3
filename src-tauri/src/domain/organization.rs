//! Organization domain entity

use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// Organization is the top-level grouping of boards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    pub id: u32,
    pub name: String,
}

impl Entity for Organization {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl Organization {
    pub fn new(id: u32, name: String) -> Self {
        Self { id, name }
    }
}
