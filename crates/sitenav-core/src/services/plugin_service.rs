// ============================================================================
// Sitenav Core - Plugin Service
// File: crates/sitenav-core/src/services/plugin_service.rs
// ============================================================================
//! Navigation plugin administration: bind a placeholder's plugin to a menu
//! and a template choice.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::domain::NavigationPlugin;
use crate::error::DomainError;
use crate::repositories::{MenuRepository, NavigationPluginRepository};

pub struct PluginService<M, P>
where
    M: MenuRepository,
    P: NavigationPluginRepository,
{
    menu_repo: Arc<M>,
    plugin_repo: Arc<P>,
    templates: Vec<String>,
}

impl<M, P> PluginService<M, P>
where
    M: MenuRepository,
    P: NavigationPluginRepository,
{
    pub fn new(menu_repo: Arc<M>, plugin_repo: Arc<P>, templates: Vec<String>) -> Self {
        Self {
            menu_repo,
            plugin_repo,
            templates,
        }
    }

    pub async fn create_plugin(
        &self,
        menu_id: Uuid,
        template: &str,
    ) -> Result<NavigationPlugin, DomainError> {
        self.validate_template(template)?;
        self.require_menu(menu_id).await?;

        let plugin = NavigationPlugin::new(menu_id, template.to_string())
            .map_err(|e| DomainError::ValidationError(e.to_string()))?;
        let plugin = self.plugin_repo.create(&plugin).await?;
        info!("Navigation plugin {} bound to menu {}", plugin.id, menu_id);
        Ok(plugin)
    }

    pub async fn update_plugin(
        &self,
        id: Uuid,
        menu_id: Uuid,
        template: &str,
    ) -> Result<NavigationPlugin, DomainError> {
        self.validate_template(template)?;
        self.require_menu(menu_id).await?;

        let mut plugin = self.require_plugin(id).await?;
        plugin.menu_id = menu_id;
        plugin.template = template.to_string();
        self.plugin_repo.update(&plugin).await
    }

    pub async fn delete_plugin(&self, id: Uuid) -> Result<(), DomainError> {
        self.require_plugin(id).await?;
        self.plugin_repo.delete(&id).await
    }

    pub async fn get_plugin(&self, id: Uuid) -> Result<NavigationPlugin, DomainError> {
        self.require_plugin(id).await
    }

    pub async fn list_plugins(&self) -> Result<Vec<NavigationPlugin>, DomainError> {
        self.plugin_repo.list_all().await
    }

    fn validate_template(&self, template: &str) -> Result<(), DomainError> {
        if self.templates.iter().any(|t| t == template) {
            Ok(())
        } else {
            Err(DomainError::TemplateNotAllowed(template.to_string()))
        }
    }

    async fn require_menu(&self, menu_id: Uuid) -> Result<(), DomainError> {
        self.menu_repo
            .find_by_id(&menu_id)
            .await?
            .ok_or(DomainError::MenuNotFound(menu_id))?;
        Ok(())
    }

    async fn require_plugin(&self, id: Uuid) -> Result<NavigationPlugin, DomainError> {
        self.plugin_repo
            .find_by_id(&id)
            .await?
            .ok_or(DomainError::PluginNotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Menu;
    use crate::repositories::{MockMenuRepository, MockNavigationPluginRepository};

    fn service(
        menu_repo: MockMenuRepository,
        plugin_repo: MockNavigationPluginRepository,
    ) -> PluginService<MockMenuRepository, MockNavigationPluginRepository> {
        PluginService::new(
            Arc::new(menu_repo),
            Arc::new(plugin_repo),
            vec![
                "menu/menu.html".to_string(),
                "menu/menuismo.html".to_string(),
            ],
        )
    }

    #[tokio::test]
    async fn test_create_plugin_with_allowed_template() {
        let menu = Menu::new(Uuid::new_v4(), "main".to_string(), None).unwrap();
        let menu_id = menu.id;

        let mut menu_repo = MockMenuRepository::new();
        menu_repo
            .expect_find_by_id()
            .returning(move |_| Ok(Some(menu.clone())));

        let mut plugin_repo = MockNavigationPluginRepository::new();
        plugin_repo.expect_create().returning(|p| Ok(p.clone()));

        let plugin = service(menu_repo, plugin_repo)
            .create_plugin(menu_id, "menu/menuismo.html")
            .await
            .unwrap();
        assert_eq!(plugin.template, "menu/menuismo.html");
        assert_eq!(plugin.menu_id, menu_id);
    }

    #[tokio::test]
    async fn test_create_plugin_rejects_unknown_template() {
        let result = service(
            MockMenuRepository::new(),
            MockNavigationPluginRepository::new(),
        )
        .create_plugin(Uuid::new_v4(), "menu/unknown.html")
        .await;

        assert!(matches!(result, Err(DomainError::TemplateNotAllowed(_))));
    }

    #[tokio::test]
    async fn test_update_missing_plugin() {
        let menu = Menu::new(Uuid::new_v4(), "main".to_string(), None).unwrap();
        let menu_id = menu.id;

        let mut menu_repo = MockMenuRepository::new();
        menu_repo
            .expect_find_by_id()
            .returning(move |_| Ok(Some(menu.clone())));

        let mut plugin_repo = MockNavigationPluginRepository::new();
        plugin_repo.expect_find_by_id().returning(|_| Ok(None));

        let result = service(menu_repo, plugin_repo)
            .update_plugin(Uuid::new_v4(), menu_id, "menu/menu.html")
            .await;
        assert!(matches!(result, Err(DomainError::PluginNotFound(_))));
    }
}
