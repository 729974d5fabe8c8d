// ============================================================================
// Sitenav Core - Menu Content Entity
// File: crates/sitenav-core/src/domain/menu_content.rs
// Description: Versioned content snapshot of a menu grouper
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::versioning::VersionState;

/// Version metadata carried by a content row. The state machine that moves
/// a version between states lives outside this service; the values are
/// stored data here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentVersion {
    pub number: i32,
    pub state: VersionState,
    pub created_at: DateTime<Utc>,
}

impl ContentVersion {
    pub fn first(state: VersionState) -> Self {
        Self {
            number: 1,
            state,
            created_at: Utc::now(),
        }
    }

    pub fn next(&self, state: VersionState) -> Self {
        Self {
            number: self.number + 1,
            state,
            created_at: Utc::now(),
        }
    }
}

/// One content snapshot of a menu. Several rows may share a `menu_id` (one
/// per version) when versioning is enabled; `root_id` points at the tree
/// root item owned by this snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MenuContent {
    pub id: Uuid,
    pub menu_id: Uuid,

    #[validate(length(min = 1, max = 100, message = "Title must be between 1 and 100 characters"))]
    pub title: String,

    pub root_id: Uuid,
    pub version: ContentVersion,

    pub created_at: DateTime<Utc>,
    pub created_by: Option<Uuid>,
}

impl MenuContent {
    /// The id is passed in rather than generated: the root item and the
    /// content row reference each other, so the caller allocates the id
    /// before either exists.
    pub fn new(
        id: Uuid,
        menu_id: Uuid,
        title: String,
        root_id: Uuid,
        version: ContentVersion,
        created_by: Option<Uuid>,
    ) -> Result<Self, validator::ValidationErrors> {
        let content = Self {
            id,
            menu_id,
            title: title.trim().to_string(),
            root_id,
            version,
            created_at: Utc::now(),
            created_by,
        };

        content.validate()?;
        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_menu_content() {
        let content = MenuContent::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            "Main navigation".to_string(),
            Uuid::new_v4(),
            ContentVersion::first(VersionState::Draft),
            None,
        );
        assert!(content.is_ok());
        assert_eq!(content.unwrap().version.number, 1);
    }

    #[test]
    fn test_next_version_increments_number() {
        let v1 = ContentVersion::first(VersionState::Published);
        let v2 = v1.next(VersionState::Draft);
        assert_eq!(v2.number, 2);
        assert_eq!(v2.state, VersionState::Draft);
    }
}
