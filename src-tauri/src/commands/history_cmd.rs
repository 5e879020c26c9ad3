//! History Commands
//!
//! Read-only access to the card audit trail.

use tauri::State;

use crate::domain::CardHistory;
use crate::AppState;

/// List one card's history, newest first
#[tauri::command]
pub async fn list_card_history(
    card_id: u32,
    state: State<'_, AppState>,
) -> Result<Vec<CardHistory>, String> {
    let repo = state.history_repo.lock().await;
    repo.list_by_card(card_id).await.map_err(|e| e.to_string())
}
