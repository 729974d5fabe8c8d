//! Navigation plugin repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::NavigationPlugin;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NavigationPluginRepository: Send + Sync {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<NavigationPlugin>, DomainError>;
    async fn list_all(&self) -> Result<Vec<NavigationPlugin>, DomainError>;
    async fn create(&self, plugin: &NavigationPlugin) -> Result<NavigationPlugin, DomainError>;
    async fn update(&self, plugin: &NavigationPlugin) -> Result<NavigationPlugin, DomainError>;
    async fn delete(&self, id: &Uuid) -> Result<(), DomainError>;
}
