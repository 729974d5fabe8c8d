// ============================================================================
// Sitenav Core - Content Reference
// File: crates/sitenav-core/src/domain/content_ref.rs
// Description: Closed set of content kinds a menu item may link to
// ============================================================================

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Reference from a menu item to the thing it links to. A closed union:
/// every kind the host platform supports is a variant here, so a reference
/// can never point at an unknown content type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContentRef {
    /// A page owned by the host platform, addressed by its id.
    Page { id: Uuid },
    /// An absolute external URL, stored verbatim.
    External { url: String },
}

impl ContentRef {
    pub fn kind(&self) -> &'static str {
        match self {
            ContentRef::Page { .. } => "page",
            ContentRef::External { .. } => "external",
        }
    }
}

/// Capability interface: resolve a content reference to an absolute URL.
///
/// A reference whose target no longer exists surfaces as
/// `DomainError::ContentNotFound` from the implementation; callers do not
/// catch or translate it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlResolver: Send + Sync {
    async fn resolve_url(&self, content: &ContentRef) -> Result<String, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names() {
        let page = ContentRef::Page { id: Uuid::new_v4() };
        let external = ContentRef::External { url: "https://example.com/".to_string() };
        assert_eq!(page.kind(), "page");
        assert_eq!(external.kind(), "external");
    }

    #[test]
    fn test_serde_tagging() {
        let page = ContentRef::Page { id: Uuid::new_v4() };
        let value = serde_json::to_value(&page).unwrap();
        assert_eq!(value["kind"], "page");
    }
}
