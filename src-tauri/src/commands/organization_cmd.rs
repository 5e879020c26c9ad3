//! Organization Commands
//!
//! Tauri commands for organization management.

use tauri::State;

use crate::domain::Organization;
use crate::AppState;

#[tauri::command]
pub async fn list_organizations(
    state: State<'_, AppState>,
) -> Result<Vec<Organization>, String> {
    let repo = state.organization_repo.lock().await;
    repo.list().await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn create_organization(
    name: String,
    state: State<'_, AppState>,
) -> Result<Organization, String> {
    let repo = state.organization_repo.lock().await;
    repo.create(&name).await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn rename_organization(
    id: u32,
    name: String,
    state: State<'_, AppState>,
) -> Result<(), String> {
    let repo = state.organization_repo.lock().await;
    repo.rename(id, &name).await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn delete_organization(
    id: u32,
    state: State<'_, AppState>,
) -> Result<(), String> {
    let repo = state.organization_repo.lock().await;
    repo.delete(id).await.map_err(|e| e.to_string())
}
