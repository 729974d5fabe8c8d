//! Repository traits (ports)

pub mod menu_content_repository;
pub mod menu_item_repository;
pub mod menu_repository;
pub mod plugin_repository;

pub use menu_content_repository::MenuContentRepository;
pub use menu_item_repository::MenuItemRepository;
pub use menu_repository::MenuRepository;
pub use plugin_repository::NavigationPluginRepository;

#[cfg(test)]
pub use menu_content_repository::MockMenuContentRepository;
#[cfg(test)]
pub use menu_item_repository::MockMenuItemRepository;
#[cfg(test)]
pub use menu_repository::MockMenuRepository;
#[cfg(test)]
pub use plugin_repository::MockNavigationPluginRepository;
