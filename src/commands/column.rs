//! Column Commands
//!
//! Frontend bindings for column-related backend commands.

use wasm_bindgen::prelude::*;
use serde::Serialize;
use crate::models::Column;
use super::invoke;

#[derive(Serialize)]
struct BoardIdArgs {
    #[serde(rename = "boardId")]
    board_id: u32,
}

#[derive(Serialize)]
struct CreateColumnArgs<'a> {
    #[serde(rename = "boardId")]
    board_id: u32,
    title: &'a str,
}

#[derive(Serialize)]
struct RenameArgs<'a> {
    id: u32,
    title: &'a str,
}

#[derive(Serialize)]
struct IdArgs {
    id: u32,
}

pub async fn list_columns(board_id: u32) -> Result<Vec<Column>, String> {
    let js_args = serde_wasm_bindgen::to_value(&BoardIdArgs { board_id }).map_err(|e| e.to_string())?;
    let result = invoke("list_columns", js_args).await;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn create_column(board_id: u32, title: &str) -> Result<Column, String> {
    let js_args = serde_wasm_bindgen::to_value(&CreateColumnArgs { board_id, title })
        .map_err(|e| e.to_string())?;
    let result = invoke("create_column", js_args).await;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn rename_column(id: u32, title: &str) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&RenameArgs { id, title }).map_err(|e| e.to_string())?;
    let _ = invoke("rename_column", js_args).await;
    Ok(())
}

pub async fn delete_column(id: u32) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&IdArgs { id }).map_err(|e| e.to_string())?;
    let _ = invoke("delete_column", js_args).await;
    Ok(())
}
