// ============================================================================
// Sitenav Core - Navigation Plugin Entity
// File: crates/sitenav-core/src/domain/navigation_plugin.rs
// Description: Binds a page placeholder to a menu and a render template
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Placeholder plugin: which menu to render, with which template. Template
/// choices are validated against configuration by the plugin service.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NavigationPlugin {
    pub id: Uuid,
    pub menu_id: Uuid,

    #[validate(length(min = 1, max = 255, message = "Template path must be between 1 and 255 characters"))]
    pub template: String,

    pub created_at: DateTime<Utc>,
}

impl NavigationPlugin {
    pub fn new(menu_id: Uuid, template: String) -> Result<Self, validator::ValidationErrors> {
        let plugin = Self {
            id: Uuid::new_v4(),
            menu_id,
            template: template.trim().to_string(),
            created_at: Utc::now(),
        };

        plugin.validate()?;
        Ok(plugin)
    }
}
