pub mod menu_content_repo_impl;
pub mod menu_item_repo_impl;
pub mod menu_repo_impl;
pub mod page_url_resolver;
pub mod plugin_repo_impl;

pub use menu_content_repo_impl::PgMenuContentRepository;
pub use menu_item_repo_impl::PgMenuItemRepository;
pub use menu_repo_impl::PgMenuRepository;
pub use page_url_resolver::PgUrlResolver;
pub use plugin_repo_impl::PgNavigationPluginRepository;
