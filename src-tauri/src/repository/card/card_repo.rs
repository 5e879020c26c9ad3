//! Card Repository - Core CRUD Operations
//!
//! SQLite-backed implementation for Card CRUD operations.
//! Position management lives in card_positioning.

use async_trait::async_trait;
use rusqlite::{params, Connection, Row};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::{Card, DomainError, DomainResult};
use super::super::traits::Repository;

const CARD_COLUMNS: &str =
    "id, column_id, board_id, title, description, due_date, position, created_at, updated_at";

pub struct CardRepository {
    pub(super) conn: Arc<Mutex<Option<Connection>>>,
}

impl CardRepository {
    pub fn new(conn: Arc<Mutex<Option<Connection>>>) -> Self {
        Self { conn }
    }

    /// List cards of one board, ordered for display
    pub async fn list_by_board(&self, board_id: u32) -> DomainResult<Vec<Card>> {
        let guard = self.conn.lock().await;
        let conn = guard
            .as_ref()
            .ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        let query = format!(
            "SELECT {} FROM cards WHERE board_id = ? ORDER BY column_id, position, id",
            CARD_COLUMNS
        );
        let mut stmt = conn
            .prepare(&query)
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let mut rows = stmt
            .query(params![board_id])
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let mut cards = Vec::new();
        while let Ok(Some(row)) = rows.next() {
            cards.push(row_to_card(row)?);
        }
        Ok(cards)
    }
}

#[async_trait]
impl Repository<Card> for CardRepository {
    async fn create(&self, entity: &Card) -> DomainResult<Card> {
        let guard = self.conn.lock().await;
        let conn = guard
            .as_ref()
            .ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        // Append at the end of the destination column
        let position = super::card_positioning::next_position(conn, entity.column_id)?;
        let now = chrono::Local::now().timestamp_millis();
        conn.execute(
            "INSERT INTO cards (column_id, board_id, title, description, due_date, position, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
            params![
                entity.column_id,
                entity.board_id,
                entity.title,
                entity.description,
                entity.due_date,
                position,
                now,
                now
            ],
        )
        .map_err(|e| DomainError::Internal(e.to_string()))?;

        let mut created = entity.clone();
        created.id = conn.last_insert_rowid() as u32;
        created.position = position;
        created.created_at = Some(now);
        created.updated_at = Some(now);
        Ok(created)
    }

    async fn find_by_id(&self, id: u32) -> DomainResult<Option<Card>> {
        let guard = self.conn.lock().await;
        let conn = guard
            .as_ref()
            .ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        let query = format!("SELECT {} FROM cards WHERE id = ?", CARD_COLUMNS);
        let mut stmt = conn
            .prepare(&query)
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let mut rows = stmt
            .query(params![id])
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        if let Ok(Some(row)) = rows.next() {
            Ok(Some(row_to_card(row)?))
        } else {
            Ok(None)
        }
    }

    async fn list(&self) -> DomainResult<Vec<Card>> {
        let guard = self.conn.lock().await;
        let conn = guard
            .as_ref()
            .ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        let query = format!(
            "SELECT {} FROM cards ORDER BY board_id, column_id, position",
            CARD_COLUMNS
        );
        let mut stmt = conn
            .prepare(&query)
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let mut rows = stmt
            .query([])
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let mut cards = Vec::new();
        while let Ok(Some(row)) = rows.next() {
            cards.push(row_to_card(row)?);
        }
        Ok(cards)
    }

    async fn update(&self, entity: &Card) -> DomainResult<Card> {
        let guard = self.conn.lock().await;
        let conn = guard
            .as_ref()
            .ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        let now = chrono::Local::now().timestamp_millis();
        conn.execute(
            "UPDATE cards SET column_id = ?, board_id = ?, title = ?, description = ?, due_date = ?, position = ?, updated_at = ? WHERE id = ?",
            params![
                entity.column_id,
                entity.board_id,
                entity.title,
                entity.description,
                entity.due_date,
                entity.position,
                now,
                entity.id
            ],
        )
        .map_err(|e| DomainError::Internal(e.to_string()))?;

        let mut updated = entity.clone();
        updated.updated_at = Some(now);
        Ok(updated)
    }

    async fn delete(&self, id: u32) -> DomainResult<()> {
        let guard = self.conn.lock().await;
        let conn = guard
            .as_ref()
            .ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        let column_id: Option<u32> = {
            let mut stmt = conn
                .prepare("SELECT column_id FROM cards WHERE id = ?")
                .map_err(|e| DomainError::Internal(e.to_string()))?;
            let mut rows = stmt
                .query(params![id])
                .map_err(|e| DomainError::Internal(e.to_string()))?;
            match rows.next() {
                Ok(Some(row)) => row.get(0).ok(),
                _ => None,
            }
        };

        let Some(column_id) = column_id else {
            return Err(DomainError::NotFound(format!("Card {} not found", id)));
        };

        conn.execute("DELETE FROM cards WHERE id = ?", params![id])
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        // Close the gap left in the source column
        super::card_positioning::reindex_column(conn, column_id)?;

        Ok(())
    }
}

/// Convert a database row to Card
pub(super) fn row_to_card(row: &Row) -> DomainResult<Card> {
    Ok(Card {
        id: row.get(0).map_err(|e| DomainError::Internal(e.to_string()))?,
        column_id: row.get(1).map_err(|e| DomainError::Internal(e.to_string()))?,
        board_id: row.get(2).map_err(|e| DomainError::Internal(e.to_string()))?,
        title: row.get(3).map_err(|e| DomainError::Internal(e.to_string()))?,
        description: row.get::<_, Option<String>>(4).ok().flatten(),
        due_date: row.get::<_, Option<String>>(5).ok().flatten(),
        position: row.get(6).unwrap_or(0),
        created_at: row.get::<_, Option<i64>>(7).ok().flatten(),
        updated_at: row.get::<_, Option<i64>>(8).ok().flatten(),
    })
}
