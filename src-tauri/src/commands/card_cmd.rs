//! Card Commands
//!
//! Tauri commands for card CRUD and movement. Every mutation appends a
//! history entry; `move_card` applies the reorder engine's placements in
//! one transaction.

use tauri::State;

use crate::domain::{Card, CardPlacement, HistoryAction};
use crate::repository::{CardPositioningOperations, Repository};
use crate::AppState;

#[tauri::command]
pub async fn list_cards(board_id: u32, state: State<'_, AppState>) -> Result<Vec<Card>, String> {
    let repo = state.card_repo.lock().await;
    repo.list_by_board(board_id).await.map_err(|e| e.to_string())
}

/// Create a card at the end of a column
#[tauri::command]
pub async fn create_card(
    column_id: u32,
    board_id: u32,
    title: String,
    description: Option<String>,
    due_date: Option<String>,
    state: State<'_, AppState>,
) -> Result<Card, String> {
    let card = {
        let repo = state.card_repo.lock().await;
        let mut card = Card::new(0, column_id, board_id, title);
        card.description = description;
        card.due_date = due_date;
        repo.create(&card).await.map_err(|e| e.to_string())?
    };

    let history = state.history_repo.lock().await;
    history
        .record(card.id, HistoryAction::Created, None, Some(column_id), None)
        .await
        .map_err(|e| e.to_string())?;

    Ok(card)
}

/// Update card payload fields (title, description, due date)
#[tauri::command]
pub async fn update_card(
    id: u32,
    title: Option<String>,
    description: Option<String>,
    due_date: Option<String>,
    state: State<'_, AppState>,
) -> Result<Card, String> {
    let repo = state.card_repo.lock().await;

    let existing = repo
        .find_by_id(id)
        .await
        .map_err(|e| e.to_string())?
        .ok_or_else(|| format!("Card {} not found", id))?;

    let mut changes = serde_json::Map::new();
    if let Some(ref title) = title {
        if *title != existing.title {
            changes.insert("title".to_string(), serde_json::json!(title));
        }
    }
    if let Some(ref description) = description {
        if Some(description) != existing.description.as_ref() {
            changes.insert("description".to_string(), serde_json::json!(description));
        }
    }
    if let Some(ref due_date) = due_date {
        if Some(due_date) != existing.due_date.as_ref() {
            changes.insert("due_date".to_string(), serde_json::json!(due_date));
        }
    }

    let updated = Card {
        id: existing.id,
        column_id: existing.column_id,
        board_id: existing.board_id,
        title: title.unwrap_or(existing.title),
        description: description.or(existing.description),
        due_date: due_date.or(existing.due_date),
        position: existing.position,
        created_at: existing.created_at,
        updated_at: existing.updated_at,
    };

    let updated = repo.update(&updated).await.map_err(|e| e.to_string())?;
    drop(repo);

    if !changes.is_empty() {
        let changes_json = serde_json::to_string(&changes).map_err(|e| e.to_string())?;
        let history = state.history_repo.lock().await;
        history
            .record(id, HistoryAction::Updated, None, None, Some(changes_json))
            .await
            .map_err(|e| e.to_string())?;
    }

    Ok(updated)
}

/// Delete a card (its column is reindexed; history is kept)
#[tauri::command]
pub async fn delete_card(id: u32, state: State<'_, AppState>) -> Result<(), String> {
    let repo = state.card_repo.lock().await;

    let existing = repo
        .find_by_id(id)
        .await
        .map_err(|e| e.to_string())?
        .ok_or_else(|| format!("Card {} not found", id))?;

    repo.delete(id).await.map_err(|e| e.to_string())?;
    drop(repo);

    let history = state.history_repo.lock().await;
    history
        .record(id, HistoryAction::Deleted, Some(existing.column_id), None, None)
        .await
        .map_err(|e| e.to_string())?;

    Ok(())
}

/// Apply a reorder: every placement in one transaction, then one history
/// entry for the moved card (`moved` across columns, `reordered` within)
#[tauri::command]
pub async fn move_card(
    card_id: u32,
    placements: Vec<CardPlacement>,
    state: State<'_, AppState>,
) -> Result<(), String> {
    if placements.is_empty() {
        return Ok(());
    }

    let repo = state.card_repo.lock().await;

    let moved = repo
        .find_by_id(card_id)
        .await
        .map_err(|e| e.to_string())?
        .ok_or_else(|| format!("Card {} not found", card_id))?;
    let from_column_id = moved.column_id;

    repo.apply_placements(&placements)
        .await
        .map_err(|e| e.to_string())?;
    drop(repo);

    let to_column_id = placements
        .iter()
        .find(|p| p.card_id == card_id)
        .map(|p| p.column_id)
        .unwrap_or(from_column_id);

    let action = if to_column_id != from_column_id {
        HistoryAction::Moved
    } else {
        HistoryAction::Reordered
    };

    let history = state.history_repo.lock().await;
    history
        .record(card_id, action, Some(from_column_id), Some(to_column_id), None)
        .await
        .map_err(|e| e.to_string())?;

    Ok(())
}
