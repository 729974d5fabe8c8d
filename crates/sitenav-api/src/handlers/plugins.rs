// ============================================================================
// Sitenav API - Navigation Plugin Handlers
// File: crates/sitenav-api/src/handlers/plugins.rs
// ============================================================================
//! Plugin CRUD and plugin rendering.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;

use sitenav_core::domain::NavigationPlugin;

use crate::dto::{CreatePluginRequest, PluginRenderResponse, RenderQuery, UpdatePluginRequest};
use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::state::AppState;

/// List plugins - GET /api/v1/plugins
pub async fn list_plugins(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<NavigationPlugin>>>, ApiError> {
    let plugins = state.plugins.list_plugins().await?;
    Ok(Json(ApiResponse::success(plugins)))
}

/// Bind a plugin to a menu and template - POST /api/v1/plugins
pub async fn create_plugin(
    State(state): State<AppState>,
    Json(payload): Json<CreatePluginRequest>,
) -> Result<Json<ApiResponse<NavigationPlugin>>, ApiError> {
    let plugin = state
        .plugins
        .create_plugin(payload.menu_id, &payload.template)
        .await?;
    Ok(Json(ApiResponse::success(plugin)))
}

/// Rebind a plugin - PUT /api/v1/plugins/{id}
pub async fn update_plugin(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdatePluginRequest>,
) -> Result<Json<ApiResponse<NavigationPlugin>>, ApiError> {
    let plugin = state
        .plugins
        .update_plugin(id, payload.menu_id, &payload.template)
        .await?;
    Ok(Json(ApiResponse::success(plugin)))
}

/// Delete a plugin - DELETE /api/v1/plugins/{id}
pub async fn delete_plugin(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    state.plugins.delete_plugin(id).await?;
    Ok(Json(ApiResponse::success(())))
}

/// Resolve a plugin to its template and node list -
/// GET /api/v1/plugins/{id}/render
pub async fn render_plugin(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<RenderQuery>,
) -> Result<Json<ApiResponse<PluginRenderResponse>>, ApiError> {
    let plugin = state.plugins.get_plugin(id).await?;
    let nodes = state
        .navigation
        .render_for_menu(plugin.menu_id, query.draft)
        .await?;
    Ok(Json(ApiResponse::success(PluginRenderResponse {
        template: plugin.template,
        nodes,
    })))
}
