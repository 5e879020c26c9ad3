//! Organization Commands
//!
//! Frontend bindings for organization-related backend commands.

use wasm_bindgen::prelude::*;
use serde::Serialize;
use crate::models::Organization;
use super::invoke;

#[derive(Serialize)]
struct NameArgs<'a> {
    name: &'a str,
}

#[derive(Serialize)]
struct RenameArgs<'a> {
    id: u32,
    name: &'a str,
}

#[derive(Serialize)]
struct IdArgs {
    id: u32,
}

pub async fn list_organizations() -> Result<Vec<Organization>, String> {
    let result = invoke("list_organizations", JsValue::NULL).await;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn create_organization(name: &str) -> Result<Organization, String> {
    let js_args = serde_wasm_bindgen::to_value(&NameArgs { name }).map_err(|e| e.to_string())?;
    let result = invoke("create_organization", js_args).await;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn rename_organization(id: u32, name: &str) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&RenameArgs { id, name }).map_err(|e| e.to_string())?;
    let _ = invoke("rename_organization", js_args).await;
    Ok(())
}

pub async fn delete_organization(id: u32) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&IdArgs { id }).map_err(|e| e.to_string())?;
    let _ = invoke("delete_organization", js_args).await;
    Ok(())
}
