// ============================================================================
// Sitenav Core - Menu Item Entity
// File: crates/sitenav-core/src/domain/menu_item.rs
// Description: One node of a navigation tree
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::content_ref::ContentRef;

/// Browser target a menu entry opens in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LinkTarget {
    #[serde(rename = "_self")]
    SameWindow,
    #[serde(rename = "_blank")]
    NewWindow,
    #[serde(rename = "_parent")]
    ParentFrame,
    #[serde(rename = "_top")]
    TopFrame,
}

impl LinkTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkTarget::SameWindow => "_self",
            LinkTarget::NewWindow => "_blank",
            LinkTarget::ParentFrame => "_parent",
            LinkTarget::TopFrame => "_top",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "_self" => Some(LinkTarget::SameWindow),
            "_blank" => Some(LinkTarget::NewWindow),
            "_parent" => Some(LinkTarget::ParentFrame),
            "_top" => Some(LinkTarget::TopFrame),
            _ => None,
        }
    }
}

impl Default for LinkTarget {
    fn default() -> Self {
        LinkTarget::SameWindow
    }
}

/// One node of a menu tree. The root item of a content carries no content
/// reference; every other item links somewhere. Sibling order within a
/// parent follows `position`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MenuItem {
    pub id: Uuid,
    pub menu_content_id: Uuid,
    pub parent_id: Option<Uuid>,
    pub position: i32,

    #[validate(length(min = 1, max = 100, message = "Title must be between 1 and 100 characters"))]
    pub title: String,

    pub content: Option<ContentRef>,
    pub link_target: LinkTarget,
    pub soft_root: bool,

    pub created_at: DateTime<Utc>,
    pub created_by: Option<Uuid>,
}

impl MenuItem {
    pub fn new_root(
        menu_content_id: Uuid,
        title: String,
        created_by: Option<Uuid>,
    ) -> Result<Self, validator::ValidationErrors> {
        let item = Self {
            id: Uuid::new_v4(),
            menu_content_id,
            parent_id: None,
            position: 0,
            title: title.trim().to_string(),
            content: None,
            link_target: LinkTarget::default(),
            soft_root: false,
            created_at: Utc::now(),
            created_by,
        };

        item.validate()?;
        Ok(item)
    }

    #[allow(clippy::too_many_arguments)]
    pub fn new_child(
        menu_content_id: Uuid,
        parent_id: Uuid,
        position: i32,
        title: String,
        content: ContentRef,
        link_target: LinkTarget,
        soft_root: bool,
        created_by: Option<Uuid>,
    ) -> Result<Self, validator::ValidationErrors> {
        let item = Self {
            id: Uuid::new_v4(),
            menu_content_id,
            parent_id: Some(parent_id),
            position,
            title: title.trim().to_string(),
            content: Some(content),
            link_target,
            soft_root,
            created_at: Utc::now(),
            created_by,
        };

        item.validate()?;
        Ok(item)
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}
