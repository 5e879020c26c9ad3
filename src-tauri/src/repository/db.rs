//! Database Connection and Setup
//!
//! Manages SQLite database connection and migrations.

use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::{DomainError, DomainResult};

/// Database state wrapper
///
/// The connection is `None` until the async background init completes;
/// repositories report "Database not initialized" in the meantime.
#[derive(Clone)]
pub struct DbState {
    pub conn: Arc<Mutex<Option<Connection>>>,
}

impl DbState {
    pub fn new() -> Self {
        Self {
            conn: Arc::new(Mutex::new(None)),
        }
    }
}

impl Default for DbState {
    fn default() -> Self {
        Self::new()
    }
}

/// Initialize database with path and run migrations
pub async fn init_db(db_path: &PathBuf) -> DomainResult<DbState> {
    let conn = open_connection(db_path)?;
    run_migrations(&conn)?;

    let state = DbState::new();
    *state.conn.lock().await = Some(conn);
    Ok(state)
}

fn open_connection(db_path: &Path) -> DomainResult<Connection> {
    if db_path.to_str() == Some(":memory:") {
        return Connection::open_in_memory()
            .map_err(|e| DomainError::Internal(format!("Failed to open in-memory db: {}", e)));
    }
    Connection::open(db_path)
        .map_err(|e| DomainError::Internal(format!("Failed to open db: {}", e)))
}

/// Check if a column exists in a table
fn column_exists(conn: &Connection, table: &str, column: &str) -> bool {
    let query = format!("PRAGMA table_info({})", table);
    if let Ok(mut stmt) = conn.prepare(&query) {
        if let Ok(mut rows) = stmt.query([]) {
            while let Ok(Some(row)) = rows.next() {
                if let Ok(name) = row.get::<_, String>(1) {
                    if name == column {
                        return true;
                    }
                }
            }
        }
    }
    false
}

/// Run database migrations
fn run_migrations(conn: &Connection) -> DomainResult<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS organizations (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            created_at INTEGER
        )",
        (),
    )
    .map_err(|e| DomainError::Internal(e.to_string()))?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS boards (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            organization_id INTEGER NOT NULL,
            title TEXT NOT NULL,
            created_at INTEGER,
            updated_at INTEGER
        )",
        (),
    )
    .map_err(|e| DomainError::Internal(e.to_string()))?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS columns (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            board_id INTEGER NOT NULL,
            title TEXT NOT NULL,
            position INTEGER NOT NULL DEFAULT 0,
            created_at INTEGER
        )",
        (),
    )
    .map_err(|e| DomainError::Internal(e.to_string()))?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS cards (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            column_id INTEGER NOT NULL,
            board_id INTEGER NOT NULL,
            title TEXT NOT NULL,
            description TEXT,
            position INTEGER NOT NULL DEFAULT 0,
            created_at INTEGER,
            updated_at INTEGER
        )",
        (),
    )
    .map_err(|e| DomainError::Internal(e.to_string()))?;

    // Added after the initial cards schema shipped
    if !column_exists(conn, "cards", "due_date") {
        conn.execute("ALTER TABLE cards ADD COLUMN due_date TEXT", ())
            .map_err(|e| DomainError::Internal(format!("Failed to add due_date: {}", e)))?;
    }

    conn.execute(
        "CREATE TABLE IF NOT EXISTS card_history (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            card_id INTEGER NOT NULL,
            action TEXT NOT NULL,
            from_column_id INTEGER,
            to_column_id INTEGER,
            changes TEXT,
            created_at INTEGER
        )",
        (),
    )
    .map_err(|e| DomainError::Internal(e.to_string()))?;

    // Indexes for board loads and history lookups
    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_boards_organization ON boards(organization_id)",
        (),
    )
    .map_err(|e| DomainError::Internal(e.to_string()))?;
    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_columns_board ON columns(board_id)",
        (),
    )
    .map_err(|e| DomainError::Internal(e.to_string()))?;
    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_cards_board ON cards(board_id)",
        (),
    )
    .map_err(|e| DomainError::Internal(e.to_string()))?;
    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_cards_column ON cards(column_id)",
        (),
    )
    .map_err(|e| DomainError::Internal(e.to_string()))?;
    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_history_card ON card_history(card_id)",
        (),
    )
    .map_err(|e| DomainError::Internal(e.to_string()))?;

    // Seed the default organization
    conn.execute(
        "INSERT INTO organizations (id, name, created_at)
         SELECT 1, 'Personal', strftime('%s', 'now') * 1000
         WHERE NOT EXISTS (SELECT 1 FROM organizations WHERE id = 1)",
        (),
    )
    .map_err(|e| DomainError::Internal(e.to_string()))?;

    Ok(())
}
