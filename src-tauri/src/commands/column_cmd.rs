//! Column Commands
//!
//! Tauri commands for column management.

use tauri::State;

use crate::domain::Column;
use crate::repository::Repository;
use crate::AppState;

#[tauri::command]
pub async fn list_columns(
    board_id: u32,
    state: State<'_, AppState>,
) -> Result<Vec<Column>, String> {
    let repo = state.column_repo.lock().await;
    repo.list_by_board(board_id).await.map_err(|e| e.to_string())
}

/// Create a column at the end of the board
#[tauri::command]
pub async fn create_column(
    board_id: u32,
    title: String,
    state: State<'_, AppState>,
) -> Result<Column, String> {
    let repo = state.column_repo.lock().await;
    repo.create(&Column::new(0, board_id, title, 0))
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn rename_column(
    id: u32,
    title: String,
    state: State<'_, AppState>,
) -> Result<(), String> {
    let repo = state.column_repo.lock().await;
    repo.rename(id, &title).await.map_err(|e| e.to_string())
}

/// Delete a column (cascade deletes its cards)
#[tauri::command]
pub async fn delete_column(id: u32, state: State<'_, AppState>) -> Result<(), String> {
    let repo = state.column_repo.lock().await;
    repo.delete(id).await.map_err(|e| e.to_string())
}
