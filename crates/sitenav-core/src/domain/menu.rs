// ============================================================================
// Sitenav Core - Menu Entity
// File: crates/sitenav-core/src/domain/menu.rs
// Description: Menu grouper, the stable identity a navigation tree hangs off
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Menu grouper entity. Created once, when the first content for it is
/// saved; immutable afterwards. `(site_id, identifier)` is unique.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Menu {
    pub id: Uuid,
    pub site_id: Uuid,

    #[validate(length(min = 1, max = 100, message = "Identifier must be between 1 and 100 characters"))]
    pub identifier: String,

    pub created_at: DateTime<Utc>,
    pub created_by: Option<Uuid>,
}

impl Menu {
    pub fn new(
        site_id: Uuid,
        identifier: String,
        created_by: Option<Uuid>,
    ) -> Result<Self, validator::ValidationErrors> {
        let menu = Self {
            id: Uuid::new_v4(),
            site_id,
            identifier: identifier.trim().to_string(),
            created_at: Utc::now(),
            created_by,
        };

        menu.validate()?;
        Ok(menu)
    }
}
