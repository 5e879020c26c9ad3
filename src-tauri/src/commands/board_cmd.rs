//! Board Commands
//!
//! Tauri commands for board management. New boards get the default
//! column set.

use tauri::State;

use crate::domain::{Board, Column};
use crate::repository::Repository;
use crate::AppState;

/// Columns every new board starts with
const DEFAULT_COLUMNS: [&str; 3] = ["To Do", "Doing", "Done"];

#[tauri::command]
pub async fn list_boards(
    organization_id: u32,
    state: State<'_, AppState>,
) -> Result<Vec<Board>, String> {
    let repo = state.board_repo.lock().await;
    repo.list_by_organization(organization_id)
        .await
        .map_err(|e| e.to_string())
}

/// Create a board and seed its default columns
#[tauri::command]
pub async fn create_board(
    organization_id: u32,
    title: String,
    state: State<'_, AppState>,
) -> Result<Board, String> {
    let board = {
        let repo = state.board_repo.lock().await;
        repo.create(&Board::new(0, organization_id, title))
            .await
            .map_err(|e| e.to_string())?
    };

    let column_repo = state.column_repo.lock().await;
    for title in DEFAULT_COLUMNS {
        column_repo
            .create(&Column::new(0, board.id, title.to_string(), 0))
            .await
            .map_err(|e| e.to_string())?;
    }

    Ok(board)
}

#[tauri::command]
pub async fn rename_board(
    id: u32,
    title: String,
    state: State<'_, AppState>,
) -> Result<(), String> {
    let repo = state.board_repo.lock().await;
    repo.rename(id, &title).await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn delete_board(id: u32, state: State<'_, AppState>) -> Result<(), String> {
    let repo = state.board_repo.lock().await;
    repo.delete(id).await.map_err(|e| e.to_string())
}
