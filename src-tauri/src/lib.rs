//! Flowdeck Backend
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - repository: Data access abstractions and implementations
//! - commands: Tauri command handlers

use std::path::PathBuf;
use tauri::{Emitter, Manager};
use tokio::sync::Mutex;

mod domain;
mod repository;
mod commands;

use repository::{
    init_db, BoardRepository, CardRepository, ColumnRepository, DbState, HistoryRepository,
    OrganizationRepository,
};

/// Application state shared across commands
pub struct AppState {
    pub organization_repo: Mutex<OrganizationRepository>,
    pub board_repo: Mutex<BoardRepository>,
    pub column_repo: Mutex<ColumnRepository>,
    pub card_repo: Mutex<CardRepository>,
    pub history_repo: Mutex<HistoryRepository>,
    pub db_state: DbState,
    pub db_path: PathBuf,
}

/// Get database path from app handle
fn get_db_path(app_handle: &tauri::AppHandle) -> PathBuf {
    let app_dir = app_handle.path().app_data_dir().unwrap();
    std::fs::create_dir_all(&app_dir).unwrap();
    app_dir.join("flowdeck.db")
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .setup(|app| {
            // Single instance check - must be first!
            #[cfg(desktop)]
            app.handle().plugin(tauri_plugin_single_instance::init(|_app, _args, _cwd| {
                // Focus the existing window when a new instance tries to start
                #[cfg(desktop)]
                if let Some(window) = _app.get_webview_window("main") {
                    let _ = window.set_focus();
                }
            }))?;

            let app_handle = app.handle().clone();

            // Initialize logging
            rolling_logger::init_logger(
                app_handle.path().app_log_dir().expect("failed to get log dir"),
                "Flowdeck",
            )
            .expect("failed to init rolling logger");

            let db_path = get_db_path(&app_handle);

            // Create initial empty DbState; commands fail with
            // "Database not initialized" until the background init lands
            let db_state = DbState::new();

            // Manage state IMMEDIATELY so the window shows without waiting
            app.manage(AppState {
                organization_repo: Mutex::new(OrganizationRepository::new(db_state.conn.clone())),
                board_repo: Mutex::new(BoardRepository::new(db_state.conn.clone())),
                column_repo: Mutex::new(ColumnRepository::new(db_state.conn.clone())),
                card_repo: Mutex::new(CardRepository::new(db_state.conn.clone())),
                history_repo: Mutex::new(HistoryRepository::new(db_state.conn.clone())),
                db_state: db_state.clone(),
                db_path: db_path.clone(),
            });

            // Initialize database asynchronously in background
            tauri::async_runtime::spawn(async move {
                match init_db(&db_path).await {
                    Ok(initialized_state) => {
                        let _ = rolling_logger::info("Async DB init success");

                        // Move the ready connection into the managed DbState
                        {
                            let mut conn_guard = db_state.conn.lock().await;
                            *conn_guard = initialized_state.conn.lock().await.take();
                        }

                        // Emit event to notify frontend
                        if let Err(e) = app_handle.emit("db-initialized", ()) {
                            log::error!("Failed to emit db-initialized event: {}", e);
                        }
                    }
                    Err(e) => {
                        let _ = rolling_logger::error(&format!("Async DB init failed: {}", e));
                    }
                }
            });

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Organizations
            commands::list_organizations,
            commands::create_organization,
            commands::rename_organization,
            commands::delete_organization,
            // Boards
            commands::list_boards,
            commands::create_board,
            commands::rename_board,
            commands::delete_board,
            // Columns
            commands::list_columns,
            commands::create_column,
            commands::rename_column,
            commands::delete_column,
            // Cards
            commands::list_cards,
            commands::create_card,
            commands::update_card,
            commands::delete_card,
            commands::move_card,
            // History
            commands::list_card_history,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
