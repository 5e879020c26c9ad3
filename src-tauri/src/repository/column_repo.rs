//! Column Repository
//!
//! SQLite-backed CRUD for board columns. Column positions within a board
//! stay contiguous; deletes reindex the remainder.

use async_trait::async_trait;
use rusqlite::{params, Connection, Row};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::{Column, DomainError, DomainResult};
use super::traits::Repository;

pub struct ColumnRepository {
    conn: Arc<Mutex<Option<Connection>>>,
}

impl ColumnRepository {
    pub fn new(conn: Arc<Mutex<Option<Connection>>>) -> Self {
        Self { conn }
    }

    /// List columns of one board in display order
    pub async fn list_by_board(&self, board_id: u32) -> DomainResult<Vec<Column>> {
        let guard = self.conn.lock().await;
        let conn = guard
            .as_ref()
            .ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        let mut stmt = conn
            .prepare(
                "SELECT id, board_id, title, position, created_at
                 FROM columns WHERE board_id = ? ORDER BY position, id",
            )
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let mut rows = stmt
            .query(params![board_id])
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let mut columns = Vec::new();
        while let Ok(Some(row)) = rows.next() {
            columns.push(row_to_column(row)?);
        }
        Ok(columns)
    }

    /// Rename a column
    pub async fn rename(&self, id: u32, title: &str) -> DomainResult<()> {
        let guard = self.conn.lock().await;
        let conn = guard
            .as_ref()
            .ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        let updated = conn
            .execute("UPDATE columns SET title = ? WHERE id = ?", params![title, id])
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        if updated == 0 {
            return Err(DomainError::NotFound(format!("Column {} not found", id)));
        }
        Ok(())
    }

    /// Next free position at the end of a board's column row
    fn next_position(conn: &Connection, board_id: u32) -> DomainResult<i32> {
        let mut stmt = conn
            .prepare("SELECT COALESCE(MAX(position), -1) + 1 FROM columns WHERE board_id = ?")
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let mut rows = stmt
            .query(params![board_id])
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        if let Ok(Some(row)) = rows.next() {
            Ok(row.get::<_, i32>(0).unwrap_or(0))
        } else {
            Ok(0)
        }
    }

    /// Reindex a board's columns to a contiguous sequence
    fn reindex_columns(conn: &Connection, board_id: u32) -> DomainResult<()> {
        let mut ids = Vec::new();
        {
            let mut stmt = conn
                .prepare("SELECT id FROM columns WHERE board_id = ? ORDER BY position, id")
                .map_err(|e| DomainError::Internal(e.to_string()))?;
            let mut rows = stmt
                .query(params![board_id])
                .map_err(|e| DomainError::Internal(e.to_string()))?;
            while let Ok(Some(row)) = rows.next() {
                let id: u32 = row.get(0).map_err(|e| DomainError::Internal(e.to_string()))?;
                ids.push(id);
            }
        }

        for (new_pos, id) in ids.iter().enumerate() {
            conn.execute(
                "UPDATE columns SET position = ? WHERE id = ?",
                params![new_pos as i32, *id],
            )
            .map_err(|e| DomainError::Internal(e.to_string()))?;
        }
        Ok(())
    }
}

#[async_trait]
impl Repository<Column> for ColumnRepository {
    async fn create(&self, entity: &Column) -> DomainResult<Column> {
        let guard = self.conn.lock().await;
        let conn = guard
            .as_ref()
            .ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        let position = Self::next_position(conn, entity.board_id)?;
        let now = chrono::Local::now().timestamp_millis();
        conn.execute(
            "INSERT INTO columns (board_id, title, position, created_at) VALUES (?, ?, ?, ?)",
            params![entity.board_id, entity.title, position, now],
        )
        .map_err(|e| DomainError::Internal(e.to_string()))?;

        let mut created = entity.clone();
        created.id = conn.last_insert_rowid() as u32;
        created.position = position;
        created.created_at = Some(now);
        Ok(created)
    }

    async fn find_by_id(&self, id: u32) -> DomainResult<Option<Column>> {
        let guard = self.conn.lock().await;
        let conn = guard
            .as_ref()
            .ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        let mut stmt = conn
            .prepare("SELECT id, board_id, title, position, created_at FROM columns WHERE id = ?")
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let mut rows = stmt
            .query(params![id])
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        if let Ok(Some(row)) = rows.next() {
            Ok(Some(row_to_column(row)?))
        } else {
            Ok(None)
        }
    }

    async fn list(&self) -> DomainResult<Vec<Column>> {
        let guard = self.conn.lock().await;
        let conn = guard
            .as_ref()
            .ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        let mut stmt = conn
            .prepare("SELECT id, board_id, title, position, created_at FROM columns ORDER BY board_id, position")
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let mut rows = stmt
            .query([])
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let mut columns = Vec::new();
        while let Ok(Some(row)) = rows.next() {
            columns.push(row_to_column(row)?);
        }
        Ok(columns)
    }

    async fn update(&self, entity: &Column) -> DomainResult<Column> {
        let guard = self.conn.lock().await;
        let conn = guard
            .as_ref()
            .ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        conn.execute(
            "UPDATE columns SET board_id = ?, title = ?, position = ? WHERE id = ?",
            params![entity.board_id, entity.title, entity.position, entity.id],
        )
        .map_err(|e| DomainError::Internal(e.to_string()))?;

        Ok(entity.clone())
    }

    async fn delete(&self, id: u32) -> DomainResult<()> {
        let guard = self.conn.lock().await;
        let conn = guard
            .as_ref()
            .ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        let board_id: Option<u32> = {
            let mut stmt = conn
                .prepare("SELECT board_id FROM columns WHERE id = ?")
                .map_err(|e| DomainError::Internal(e.to_string()))?;
            let mut rows = stmt
                .query(params![id])
                .map_err(|e| DomainError::Internal(e.to_string()))?;
            match rows.next() {
                Ok(Some(row)) => row.get(0).ok(),
                _ => None,
            }
        };

        let Some(board_id) = board_id else {
            return Err(DomainError::NotFound(format!("Column {} not found", id)));
        };

        // Cascade cards, drop the column, close the position gap
        conn.execute("DELETE FROM cards WHERE column_id = ?", params![id])
            .map_err(|e| DomainError::Internal(e.to_string()))?;
        conn.execute("DELETE FROM columns WHERE id = ?", params![id])
            .map_err(|e| DomainError::Internal(e.to_string()))?;
        Self::reindex_columns(conn, board_id)?;

        Ok(())
    }
}

fn row_to_column(row: &Row) -> DomainResult<Column> {
    Ok(Column {
        id: row.get(0).map_err(|e| DomainError::Internal(e.to_string()))?,
        board_id: row.get(1).map_err(|e| DomainError::Internal(e.to_string()))?,
        title: row.get(2).map_err(|e| DomainError::Internal(e.to_string()))?,
        position: row.get(3).unwrap_or(0),
        created_at: row.get::<_, Option<i64>>(4).ok().flatten(),
    })
}
