//! Domain errors

use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Menu not found: {0}")]
    MenuNotFound(Uuid),

    #[error("Menu content not found: {0}")]
    MenuContentNotFound(Uuid),

    #[error("Menu has no content: {0}")]
    MenuHasNoContent(Uuid),

    #[error("Menu item not found: {0}")]
    MenuItemNotFound(Uuid),

    #[error("Referenced content not found: {0}")]
    ContentNotFound(Uuid),

    #[error("Menu identifier already exists on site {site_id}: {identifier}")]
    IdentifierAlreadyExists { site_id: Uuid, identifier: String },

    #[error("Item {item} does not belong to menu content {menu_content}")]
    ItemOutsideContent { item: Uuid, menu_content: Uuid },

    #[error("Cannot move item {0} under its own subtree")]
    MoveIntoOwnSubtree(Uuid),

    #[error("Root item cannot be moved or removed: {0}")]
    RootItemImmovable(Uuid),

    #[error("Menu tree is corrupt: {0}")]
    CorruptTree(String),

    #[error("Template not allowed: {0}")]
    TemplateNotAllowed(String),

    #[error("Plugin not found: {0}")]
    PluginNotFound(Uuid),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
