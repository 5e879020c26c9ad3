//! Organization Repository
//!
//! Handles all organization-related database operations.

use rusqlite::{params, Connection};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::{DomainError, DomainResult, Organization};

/// The seeded organization (id 1) cannot be deleted or renamed
const DEFAULT_ORGANIZATION_ID: u32 = 1;

pub struct OrganizationRepository {
    conn: Arc<Mutex<Option<Connection>>>,
}

impl OrganizationRepository {
    pub fn new(conn: Arc<Mutex<Option<Connection>>>) -> Self {
        Self { conn }
    }

    /// List all organizations
    pub async fn list(&self) -> DomainResult<Vec<Organization>> {
        let guard = self.conn.lock().await;
        let conn = guard
            .as_ref()
            .ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        let mut stmt = conn
            .prepare("SELECT id, name FROM organizations ORDER BY id")
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let mut rows = stmt
            .query([])
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let mut organizations = Vec::new();
        while let Ok(Some(row)) = rows.next() {
            let id: u32 = row.get(0).unwrap_or(0);
            let name: String = row.get(1).unwrap_or_default();
            organizations.push(Organization::new(id, name));
        }
        Ok(organizations)
    }

    /// Create a new organization
    pub async fn create(&self, name: &str) -> DomainResult<Organization> {
        if name.trim().is_empty() {
            return Err(DomainError::InvalidInput("Organization name is empty".into()));
        }

        let guard = self.conn.lock().await;
        let conn = guard
            .as_ref()
            .ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        let now = chrono::Local::now().timestamp_millis();
        conn.execute(
            "INSERT INTO organizations (name, created_at) VALUES (?, ?)",
            params![name, now],
        )
        .map_err(|e| DomainError::Internal(e.to_string()))?;

        let id = conn.last_insert_rowid() as u32;
        Ok(Organization::new(id, name.to_string()))
    }

    /// Rename an organization (the default organization is fixed)
    pub async fn rename(&self, id: u32, name: &str) -> DomainResult<()> {
        if id == DEFAULT_ORGANIZATION_ID {
            return Err(DomainError::InvalidInput("Cannot rename default organization".into()));
        }

        let guard = self.conn.lock().await;
        let conn = guard
            .as_ref()
            .ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        let updated = conn
            .execute("UPDATE organizations SET name = ? WHERE id = ?", params![name, id])
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        if updated == 0 {
            return Err(DomainError::NotFound(format!("Organization {} not found", id)));
        }
        Ok(())
    }

    /// Delete an organization and everything under it
    pub async fn delete(&self, id: u32) -> DomainResult<()> {
        if id == DEFAULT_ORGANIZATION_ID {
            return Err(DomainError::InvalidInput("Cannot delete default organization".into()));
        }

        let guard = self.conn.lock().await;
        let conn = guard
            .as_ref()
            .ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        // Cascade: cards and columns of every board in the organization
        conn.execute(
            "DELETE FROM cards WHERE board_id IN (SELECT id FROM boards WHERE organization_id = ?)",
            params![id],
        )
        .map_err(|e| DomainError::Internal(e.to_string()))?;
        conn.execute(
            "DELETE FROM columns WHERE board_id IN (SELECT id FROM boards WHERE organization_id = ?)",
            params![id],
        )
        .map_err(|e| DomainError::Internal(e.to_string()))?;
        conn.execute(
            "DELETE FROM boards WHERE organization_id = ?",
            params![id],
        )
        .map_err(|e| DomainError::Internal(e.to_string()))?;

        conn.execute("DELETE FROM organizations WHERE id = ?", params![id])
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        Ok(())
    }
}
