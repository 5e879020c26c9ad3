//! Board Repository
//!
//! SQLite-backed CRUD for boards.

use async_trait::async_trait;
use rusqlite::{params, Connection, Row};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::{Board, DomainError, DomainResult};
use super::traits::Repository;

pub struct BoardRepository {
    conn: Arc<Mutex<Option<Connection>>>,
}

impl BoardRepository {
    pub fn new(conn: Arc<Mutex<Option<Connection>>>) -> Self {
        Self { conn }
    }

    /// List boards of one organization
    pub async fn list_by_organization(&self, organization_id: u32) -> DomainResult<Vec<Board>> {
        let guard = self.conn.lock().await;
        let conn = guard
            .as_ref()
            .ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        let mut stmt = conn
            .prepare(
                "SELECT id, organization_id, title, created_at, updated_at
                 FROM boards WHERE organization_id = ? ORDER BY id",
            )
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let mut rows = stmt
            .query(params![organization_id])
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let mut boards = Vec::new();
        while let Ok(Some(row)) = rows.next() {
            boards.push(row_to_board(row)?);
        }
        Ok(boards)
    }

    /// Rename a board
    pub async fn rename(&self, id: u32, title: &str) -> DomainResult<()> {
        let guard = self.conn.lock().await;
        let conn = guard
            .as_ref()
            .ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        let now = chrono::Local::now().timestamp_millis();
        let updated = conn
            .execute(
                "UPDATE boards SET title = ?, updated_at = ? WHERE id = ?",
                params![title, now, id],
            )
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        if updated == 0 {
            return Err(DomainError::NotFound(format!("Board {} not found", id)));
        }
        Ok(())
    }
}

#[async_trait]
impl Repository<Board> for BoardRepository {
    async fn create(&self, entity: &Board) -> DomainResult<Board> {
        let guard = self.conn.lock().await;
        let conn = guard
            .as_ref()
            .ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        let now = chrono::Local::now().timestamp_millis();
        conn.execute(
            "INSERT INTO boards (organization_id, title, created_at, updated_at) VALUES (?, ?, ?, ?)",
            params![entity.organization_id, entity.title, now, now],
        )
        .map_err(|e| DomainError::Internal(e.to_string()))?;

        let mut created = entity.clone();
        created.id = conn.last_insert_rowid() as u32;
        created.created_at = Some(now);
        created.updated_at = Some(now);
        Ok(created)
    }

    async fn find_by_id(&self, id: u32) -> DomainResult<Option<Board>> {
        let guard = self.conn.lock().await;
        let conn = guard
            .as_ref()
            .ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        let mut stmt = conn
            .prepare(
                "SELECT id, organization_id, title, created_at, updated_at FROM boards WHERE id = ?",
            )
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let mut rows = stmt
            .query(params![id])
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        if let Ok(Some(row)) = rows.next() {
            Ok(Some(row_to_board(row)?))
        } else {
            Ok(None)
        }
    }

    async fn list(&self) -> DomainResult<Vec<Board>> {
        let guard = self.conn.lock().await;
        let conn = guard
            .as_ref()
            .ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        let mut stmt = conn
            .prepare("SELECT id, organization_id, title, created_at, updated_at FROM boards ORDER BY id")
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let mut rows = stmt
            .query([])
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let mut boards = Vec::new();
        while let Ok(Some(row)) = rows.next() {
            boards.push(row_to_board(row)?);
        }
        Ok(boards)
    }

    async fn update(&self, entity: &Board) -> DomainResult<Board> {
        let guard = self.conn.lock().await;
        let conn = guard
            .as_ref()
            .ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        let now = chrono::Local::now().timestamp_millis();
        conn.execute(
            "UPDATE boards SET organization_id = ?, title = ?, updated_at = ? WHERE id = ?",
            params![entity.organization_id, entity.title, now, entity.id],
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

        // Cascade: cards first, then columns, then the board
        conn.execute("DELETE FROM cards WHERE board_id = ?", params![id])
            .map_err(|e| DomainError::Internal(e.to_string()))?;
        conn.execute("DELETE FROM columns WHERE board_id = ?", params![id])
            .map_err(|e| DomainError::Internal(e.to_string()))?;
        conn.execute("DELETE FROM boards WHERE id = ?", params![id])
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        Ok(())
    }
}

fn row_to_board(row: &Row) -> DomainResult<Board> {
    Ok(Board {
        id: row.get(0).map_err(|e| DomainError::Internal(e.to_string()))?,
        organization_id: row.get(1).map_err(|e| DomainError::Internal(e.to_string()))?,
        title: row.get(2).map_err(|e| DomainError::Internal(e.to_string()))?,
        created_at: row.get::<_, Option<i64>>(3).ok().flatten(),
        updated_at: row.get::<_, Option<i64>>(4).ok().flatten(),
    })
}
