// ============================================================================
// Sitenav API - Menu Item Handlers
// File: crates/sitenav-api/src/handlers/menu_items.rs
// ============================================================================
//! Menu item administration, scoped to a menu content.
//!
//! Add and change rights exist only inside a menu-content scope; the
//! unscoped routes mirror the admin rule that a request without a content
//! identifier may only edit a pre-existing specific item, never add one.

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use sitenav_core::domain::MenuItem;
use sitenav_core::services::{can_add_item, can_change_item, MenuItemContext, MenuItemNode, UpdateMenuItem};

use crate::dto::AddItemRequest;
use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::state::AppState;

/// List a content's tree - GET /api/v1/menu-contents/{menu_content_id}/items
pub async fn list_items(
    State(state): State<AppState>,
    Path(menu_content_id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<MenuItemNode>>>, ApiError> {
    let items = state.menus.list_items(menu_content_id).await?;
    Ok(Json(ApiResponse::success(items)))
}

/// Add an item - POST /api/v1/menu-contents/{menu_content_id}/items
pub async fn add_item(
    State(state): State<AppState>,
    Path(menu_content_id): Path<Uuid>,
    Json(payload): Json<AddItemRequest>,
) -> Result<Json<ApiResponse<MenuItem>>, ApiError> {
    let ctx = MenuItemContext {
        menu_content_id: Some(menu_content_id),
    };
    if !can_add_item(&ctx) {
        return Err(ApiError::Forbidden(
            "item creation requires a menu content scope".to_string(),
        ));
    }
    let item = state
        .menus
        .add_item(menu_content_id, payload.item, payload.created_by)
        .await?;
    Ok(Json(ApiResponse::success(item)))
}

/// Add an item without a URL scope - POST /api/v1/menu-items
///
/// Denied unless the payload carries a menu content id.
pub async fn add_item_unscoped(
    State(state): State<AppState>,
    Json(payload): Json<AddItemRequest>,
) -> Result<Json<ApiResponse<MenuItem>>, ApiError> {
    let ctx = MenuItemContext {
        menu_content_id: payload.menu_content_id,
    };
    let menu_content_id = match payload.menu_content_id {
        Some(id) if can_add_item(&ctx) => id,
        _ => {
            return Err(ApiError::Forbidden(
                "item creation requires a menu content scope".to_string(),
            ))
        }
    };
    let item = state
        .menus
        .add_item(menu_content_id, payload.item, payload.created_by)
        .await?;
    Ok(Json(ApiResponse::success(item)))
}

/// Change an item - PUT /api/v1/menu-contents/{menu_content_id}/items/{item_id}
pub async fn change_item(
    State(state): State<AppState>,
    Path((menu_content_id, item_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<UpdateMenuItem>,
) -> Result<Json<ApiResponse<MenuItem>>, ApiError> {
    let ctx = MenuItemContext {
        menu_content_id: Some(menu_content_id),
    };
    if !can_change_item(&ctx, Some(item_id)) {
        return Err(ApiError::Forbidden(
            "item change requires a menu content scope".to_string(),
        ));
    }
    let item = state
        .menus
        .change_item(menu_content_id, item_id, payload)
        .await?;
    Ok(Json(ApiResponse::success(item)))
}

/// Change a pre-existing item without a URL scope -
/// PUT /api/v1/menu-items/{item_id}
pub async fn change_item_unscoped(
    State(state): State<AppState>,
    Path(item_id): Path<Uuid>,
    Json(payload): Json<UpdateMenuItem>,
) -> Result<Json<ApiResponse<MenuItem>>, ApiError> {
    let ctx = MenuItemContext::default();
    if !can_change_item(&ctx, Some(item_id)) {
        return Err(ApiError::Forbidden(
            "item change requires a menu content scope or an existing item".to_string(),
        ));
    }
    let item = state.menus.change_item_direct(item_id, payload).await?;
    Ok(Json(ApiResponse::success(item)))
}

/// Remove an item and its subtree -
/// DELETE /api/v1/menu-contents/{menu_content_id}/items/{item_id}
pub async fn remove_item(
    State(state): State<AppState>,
    Path((menu_content_id, item_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<ApiResponse<u64>>, ApiError> {
    let removed = state.menus.remove_item(menu_content_id, item_id).await?;
    Ok(Json(ApiResponse::success(removed)))
}
