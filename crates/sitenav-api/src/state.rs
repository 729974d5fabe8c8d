use std::sync::Arc;

use sitenav_core::services::{MenuService, NavigationService, PluginService};
use sitenav_infrastructure::{
    PgMenuContentRepository, PgMenuItemRepository, PgMenuRepository, PgNavigationPluginRepository,
};
use sitenav_shared::config::AppConfig;

pub type Menus = MenuService<PgMenuRepository, PgMenuContentRepository, PgMenuItemRepository>;
pub type Navigation = NavigationService<PgMenuContentRepository, PgMenuItemRepository>;
pub type Plugins = PluginService<PgMenuRepository, PgNavigationPluginRepository>;

#[derive(Clone)]
pub struct AppState {
    pub menus: Arc<Menus>,
    pub navigation: Arc<Navigation>,
    pub plugins: Arc<Plugins>,
    pub config: AppConfig,
}
