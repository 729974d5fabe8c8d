// ============================================================================
// Sitenav API - Menu Content Handlers
// File: crates/sitenav-api/src/handlers/menu_contents.rs
// ============================================================================
//! Menu content administration (create, list, versions)

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use sitenav_core::domain::MenuContent;

use crate::dto::{CreateMenuContentRequest, CreateVersionRequest, SetVersionStateRequest};
use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::state::AppState;

/// List all menu contents - GET /api/v1/menu-contents
pub async fn list_contents(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<MenuContent>>>, ApiError> {
    let contents = state.menus.list_contents().await?;
    Ok(Json(ApiResponse::success(contents)))
}

/// Create a menu with its first content - POST /api/v1/menu-contents
pub async fn create_content(
    State(state): State<AppState>,
    Json(payload): Json<CreateMenuContentRequest>,
) -> Result<Json<ApiResponse<MenuContent>>, ApiError> {
    let content = state
        .menus
        .create_menu_content(&payload.title, payload.site_id, payload.created_by)
        .await?;
    Ok(Json(ApiResponse::success(content)))
}

/// Copy the newest content of a menu into a new draft version -
/// POST /api/v1/menus/{menu_id}/versions
pub async fn create_version(
    State(state): State<AppState>,
    Path(menu_id): Path<Uuid>,
    Json(payload): Json<CreateVersionRequest>,
) -> Result<Json<ApiResponse<MenuContent>>, ApiError> {
    let content = state
        .menus
        .create_draft_version(menu_id, payload.created_by)
        .await?;
    Ok(Json(ApiResponse::success(content)))
}

/// Store a new version state - PUT /api/v1/menu-contents/{id}/version-state
pub async fn set_version_state(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<SetVersionStateRequest>,
) -> Result<Json<ApiResponse<MenuContent>>, ApiError> {
    let content = state.menus.set_version_state(id, payload.state).await?;
    Ok(Json(ApiResponse::success(content)))
}
