//! History Commands
//!
//! Frontend bindings for the card audit trail.

use wasm_bindgen::prelude::*;
use serde::Serialize;
use crate::models::CardHistory;
use super::invoke;

#[derive(Serialize)]
struct CardIdArgs {
    #[serde(rename = "cardId")]
    card_id: u32,
}

pub async fn list_card_history(card_id: u32) -> Result<Vec<CardHistory>, String> {
    let js_args = serde_wasm_bindgen::to_value(&CardIdArgs { card_id }).map_err(|e| e.to_string())?;
    let result = invoke("list_card_history", js_args).await;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}
