//! Card Commands
//!
//! Frontend bindings for card-related backend commands. `move_card` is the
//! persistence side of the reorder engine: it ships the full placement set
//! and surfaces backend rejection so the caller can discard its optimistic
//! update.

use wasm_bindgen::prelude::*;
use serde::Serialize;
use crate::models::{Card, CardPlacement};
use super::{invoke, try_invoke};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
pub struct CreateCardArgs<'a> {
    #[serde(rename = "columnId")]
    pub column_id: u32,
    #[serde(rename = "boardId")]
    pub board_id: u32,
    pub title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    #[serde(rename = "dueDate", skip_serializing_if = "Option::is_none")]
    pub due_date: Option<&'a str>,
}

#[derive(Serialize)]
struct BoardIdArgs {
    #[serde(rename = "boardId")]
    board_id: u32,
}

#[derive(Serialize)]
struct IdArgs {
    id: u32,
}

#[derive(Serialize)]
struct UpdateCardArgs<'a> {
    id: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(rename = "dueDate", skip_serializing_if = "Option::is_none")]
    due_date: Option<&'a str>,
}

#[derive(Serialize)]
struct MoveCardArgs<'a> {
    #[serde(rename = "cardId")]
    card_id: u32,
    placements: &'a [CardPlacement],
}

// ========================
// Commands
// ========================

pub async fn list_cards(board_id: u32) -> Result<Vec<Card>, String> {
    let js_args = serde_wasm_bindgen::to_value(&BoardIdArgs { board_id }).map_err(|e| e.to_string())?;
    let result = invoke("list_cards", js_args).await;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn create_card(args: &CreateCardArgs<'_>) -> Result<Card, String> {
    let js_args = serde_wasm_bindgen::to_value(args).map_err(|e| e.to_string())?;
    let result = invoke("create_card", js_args).await;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn update_card(
    id: u32,
    title: Option<&str>,
    description: Option<&str>,
    due_date: Option<&str>,
) -> Result<Card, String> {
    let js_args = serde_wasm_bindgen::to_value(&UpdateCardArgs { id, title, description, due_date })
        .map_err(|e| e.to_string())?;
    let result = invoke("update_card", js_args).await;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn delete_card(id: u32) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&IdArgs { id }).map_err(|e| e.to_string())?;
    let _ = invoke("delete_card", js_args).await;
    Ok(())
}

/// Persist a reorder. Errors matter here: a rejected write means the
/// optimistic store update must be thrown away and state re-fetched.
pub async fn move_card(card_id: u32, placements: &[CardPlacement]) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&MoveCardArgs { card_id, placements })
        .map_err(|e| e.to_string())?;
    try_invoke("move_card", js_args)
        .await
        .map(|_| ())
        .map_err(|e| e.as_string().unwrap_or_else(|| format!("{:?}", e)))
}
