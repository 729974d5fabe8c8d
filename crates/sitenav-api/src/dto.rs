//! Request and response payloads

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sitenav_core::navigation::NavigationNode;
use sitenav_core::services::NewMenuItem;
use sitenav_core::versioning::VersionState;

#[derive(Debug, Deserialize)]
pub struct CreateMenuContentRequest {
    pub title: String,
    pub site_id: Uuid,
    pub created_by: Option<Uuid>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateVersionRequest {
    pub created_by: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
pub struct SetVersionStateRequest {
    pub state: VersionState,
}

/// Item creation payload. `menu_content_id` is only consulted by the
/// unscoped route; the scoped route takes the content from the URL.
#[derive(Debug, Deserialize)]
pub struct AddItemRequest {
    pub menu_content_id: Option<Uuid>,
    #[serde(flatten)]
    pub item: NewMenuItem,
    pub created_by: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
pub struct CreatePluginRequest {
    pub menu_id: Uuid,
    pub template: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdatePluginRequest {
    pub menu_id: Uuid,
    pub template: String,
}

#[derive(Debug, Deserialize)]
pub struct NavigationQuery {
    #[serde(default)]
    pub draft: bool,
    pub namespace: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
pub struct RenderQuery {
    #[serde(default)]
    pub draft: bool,
}

#[derive(Debug, Serialize)]
pub struct PluginRenderResponse {
    pub template: String,
    pub nodes: Vec<NavigationNode>,
}
