//! Application services

pub mod menu_service;
pub mod navigation_service;
pub mod plugin_service;

pub use menu_service::{
    can_add_item, can_change_item, MenuItemContext, MenuItemNode, MenuService, NewMenuItem,
    UpdateMenuItem,
};
pub use navigation_service::NavigationService;
pub use plugin_service::PluginService;
