//! Menu content repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::MenuContent;
use crate::error::DomainError;
use crate::versioning::VersionState;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MenuContentRepository: Send + Sync {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<MenuContent>, DomainError>;
    /// All content rows, in stable grouper order (grouper creation, then
    /// grouper id), newest version first within a grouper.
    async fn list_all(&self) -> Result<Vec<MenuContent>, DomainError>;
    /// One grouper's content rows, newest version first.
    async fn list_for_menu(&self, menu_id: &Uuid) -> Result<Vec<MenuContent>, DomainError>;
    async fn create(&self, content: &MenuContent) -> Result<MenuContent, DomainError>;
    async fn set_version_state(
        &self,
        id: &Uuid,
        state: VersionState,
    ) -> Result<MenuContent, DomainError>;
}
