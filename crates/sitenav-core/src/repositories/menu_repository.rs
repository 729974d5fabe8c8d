//! Menu grouper repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Menu;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MenuRepository: Send + Sync {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Menu>, DomainError>;
    async fn find_by_identifier(
        &self,
        site_id: &Uuid,
        identifier: &str,
    ) -> Result<Option<Menu>, DomainError>;
    async fn create(&self, menu: &Menu) -> Result<Menu, DomainError>;
}
