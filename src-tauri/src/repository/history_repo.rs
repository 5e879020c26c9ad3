//! Card History Repository
//!
//! Append-only audit trail. Entries are recorded on card mutations and
//! never updated or deleted.

use rusqlite::{params, Connection, Row};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::{CardHistory, DomainError, DomainResult, HistoryAction};

pub struct HistoryRepository {
    conn: Arc<Mutex<Option<Connection>>>,
}

impl HistoryRepository {
    pub fn new(conn: Arc<Mutex<Option<Connection>>>) -> Self {
        Self { conn }
    }

    /// Append one history entry
    pub async fn record(
        &self,
        card_id: u32,
        action: HistoryAction,
        from_column_id: Option<u32>,
        to_column_id: Option<u32>,
        changes: Option<String>,
    ) -> DomainResult<CardHistory> {
        let guard = self.conn.lock().await;
        let conn = guard
            .as_ref()
            .ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        let now = chrono::Local::now().timestamp_millis();
        conn.execute(
            "INSERT INTO card_history (card_id, action, from_column_id, to_column_id, changes, created_at)
             VALUES (?, ?, ?, ?, ?, ?)",
            params![card_id, action.as_str(), from_column_id, to_column_id, changes, now],
        )
        .map_err(|e| DomainError::Internal(e.to_string()))?;

        Ok(CardHistory {
            id: conn.last_insert_rowid() as u32,
            card_id,
            action,
            from_column_id,
            to_column_id,
            changes,
            created_at: Some(now),
        })
    }

    /// List one card's history, newest first
    pub async fn list_by_card(&self, card_id: u32) -> DomainResult<Vec<CardHistory>> {
        let guard = self.conn.lock().await;
        let conn = guard
            .as_ref()
            .ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        let mut stmt = conn
            .prepare(
                "SELECT id, card_id, action, from_column_id, to_column_id, changes, created_at
                 FROM card_history WHERE card_id = ? ORDER BY created_at DESC, id DESC",
            )
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let mut rows = stmt
            .query(params![card_id])
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let mut entries = Vec::new();
        while let Ok(Some(row)) = rows.next() {
            entries.push(row_to_history(row)?);
        }
        Ok(entries)
    }
}

fn row_to_history(row: &Row) -> DomainResult<CardHistory> {
    let action: String = row.get(2).map_err(|e| DomainError::Internal(e.to_string()))?;
    Ok(CardHistory {
        id: row.get(0).map_err(|e| DomainError::Internal(e.to_string()))?,
        card_id: row.get(1).map_err(|e| DomainError::Internal(e.to_string()))?,
        action: HistoryAction::from_str(&action),
        from_column_id: row.get::<_, Option<u32>>(3).ok().flatten(),
        to_column_id: row.get::<_, Option<u32>>(4).ok().flatten(),
        changes: row.get::<_, Option<String>>(5).ok().flatten(),
        created_at: row.get::<_, Option<i64>>(6).ok().flatten(),
    })
}
