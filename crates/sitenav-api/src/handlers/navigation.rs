// ============================================================================
// Sitenav API - Navigation Handlers
// File: crates/sitenav-api/src/handlers/navigation.rs
// ============================================================================
//! Render-side endpoints consumed by the host menu system.

use axum::{
    extract::{Query, State},
    Json,
};

use sitenav_core::domain::MenuItem;
use sitenav_core::navigation::NavigationNode;

use crate::dto::NavigationQuery;
use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Flat node list - GET /api/v1/navigation/nodes
///
/// With a `namespace`, the list is cut to that subtree's descendants.
pub async fn get_nodes(
    State(state): State<AppState>,
    Query(query): Query<NavigationQuery>,
) -> Result<Json<ApiResponse<Vec<NavigationNode>>>, ApiError> {
    let nodes = state.navigation.get_nodes(query.draft).await?;
    let nodes = match query.namespace {
        Some(namespace) => state.navigation.select(&nodes, Some(namespace)),
        None => nodes,
    };
    Ok(Json(ApiResponse::success(nodes)))
}

/// Selected root items - GET /api/v1/navigation/roots
pub async fn get_roots(
    State(state): State<AppState>,
    Query(query): Query<NavigationQuery>,
) -> Result<Json<ApiResponse<Vec<MenuItem>>>, ApiError> {
    let roots = state.navigation.get_roots(query.draft).await?;
    Ok(Json(ApiResponse::success(roots)))
}
