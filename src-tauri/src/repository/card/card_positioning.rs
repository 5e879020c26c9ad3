//! Card Positioning Operations
//!
//! Operations for managing card positions within their columns. Reorder
//! placements are applied as one transaction so a half-applied move never
//! becomes durable.

use async_trait::async_trait;
use rusqlite::{params, Connection};

use crate::domain::{CardPlacement, DomainError, DomainResult};

/// Trait for card positioning operations
#[async_trait]
pub trait CardPositioningOperations {
    /// Apply a batch of column/position assignments atomically
    async fn apply_placements(&self, placements: &[CardPlacement]) -> DomainResult<()>;

    /// Reindex one column's cards to be sequential (0, 1, 2, ...)
    async fn reindex(&self, column_id: u32) -> DomainResult<()>;
}

#[async_trait]
impl CardPositioningOperations for super::card_repo::CardRepository {
    async fn apply_placements(&self, placements: &[CardPlacement]) -> DomainResult<()> {
        let mut guard = self.conn.lock().await;
        let conn = guard
            .as_mut()
            .ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        let tx = conn
            .transaction()
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let now = chrono::Local::now().timestamp_millis();
        for placement in placements {
            let updated = tx
                .execute(
                    "UPDATE cards SET column_id = ?, position = ?, updated_at = ? WHERE id = ?",
                    params![placement.column_id, placement.position, now, placement.card_id],
                )
                .map_err(|e| DomainError::Internal(e.to_string()))?;
            if updated == 0 {
                return Err(DomainError::NotFound(format!(
                    "Card {} not found",
                    placement.card_id
                )));
            }
        }

        tx.commit().map_err(|e| DomainError::Internal(e.to_string()))?;
        Ok(())
    }

    async fn reindex(&self, column_id: u32) -> DomainResult<()> {
        let guard = self.conn.lock().await;
        let conn = guard
            .as_ref()
            .ok_or(DomainError::Internal("Database not initialized".to_string()))?;
        reindex_column(conn, column_id)
    }
}

/// Get next position at the end of a column (used in create)
pub(super) fn next_position(conn: &Connection, column_id: u32) -> DomainResult<i32> {
    let mut stmt = conn
        .prepare("SELECT COALESCE(MAX(position), -1) + 1 FROM cards WHERE column_id = ?")
        .map_err(|e| DomainError::Internal(e.to_string()))?;

    let mut rows = stmt
        .query(params![column_id])
        .map_err(|e| DomainError::Internal(e.to_string()))?;

    if let Ok(Some(row)) = rows.next() {
        Ok(row.get::<_, i32>(0).unwrap_or(0))
    } else {
        Ok(0)
    }
}

/// Rewrite one column's positions to a contiguous sequence
pub(super) fn reindex_column(conn: &Connection, column_id: u32) -> DomainResult<()> {
    let mut ids = Vec::new();
    {
        let mut stmt = conn
            .prepare("SELECT id FROM cards WHERE column_id = ? ORDER BY position, id")
            .map_err(|e| DomainError::Internal(e.to_string()))?;
        let mut rows = stmt
            .query(params![column_id])
            .map_err(|e| DomainError::Internal(e.to_string()))?;
        while let Ok(Some(row)) = rows.next() {
            let id: u32 = row.get(0).map_err(|e| DomainError::Internal(e.to_string()))?;
            ids.push(id);
        }
    }

    let now = chrono::Local::now().timestamp_millis();
    for (new_pos, id) in ids.iter().enumerate() {
        conn.execute(
            "UPDATE cards SET position = ?, updated_at = ? WHERE id = ?",
            params![new_pos as i32, now, *id],
        )
        .map_err(|e| DomainError::Internal(e.to_string()))?;
    }

    Ok(())
}
