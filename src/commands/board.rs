//! Board Commands
//!
//! Frontend bindings for board-related backend commands.

use wasm_bindgen::prelude::*;
use serde::Serialize;
use crate::models::Board;
use super::invoke;

#[derive(Serialize)]
struct OrganizationIdArgs {
    #[serde(rename = "organizationId")]
    organization_id: u32,
}

#[derive(Serialize)]
struct CreateBoardArgs<'a> {
    #[serde(rename = "organizationId")]
    organization_id: u32,
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

pub async fn list_boards(organization_id: u32) -> Result<Vec<Board>, String> {
    let js_args = serde_wasm_bindgen::to_value(&OrganizationIdArgs { organization_id })
        .map_err(|e| e.to_string())?;
    let result = invoke("list_boards", js_args).await;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn create_board(organization_id: u32, title: &str) -> Result<Board, String> {
    let js_args = serde_wasm_bindgen::to_value(&CreateBoardArgs { organization_id, title })
        .map_err(|e| e.to_string())?;
    let result = invoke("create_board", js_args).await;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn rename_board(id: u32, title: &str) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&RenameArgs { id, title }).map_err(|e| e.to_string())?;
    let _ = invoke("rename_board", js_args).await;
    Ok(())
}

pub async fn delete_board(id: u32) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&IdArgs { id }).map_err(|e| e.to_string())?;
    let _ = invoke("delete_board", js_args).await;
    Ok(())
}
