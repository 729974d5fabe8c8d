//! Menu item repository trait (port)
//!
//! This is the storage side of the tree: items persist as adjacency rows
//! and the arena (`crate::tree::MenuTree`) is built from `list_for_content`.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::MenuItem;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MenuItemRepository: Send + Sync {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<MenuItem>, DomainError>;
    async fn list_for_content(&self, menu_content_id: &Uuid)
        -> Result<Vec<MenuItem>, DomainError>;
    async fn create(&self, item: &MenuItem) -> Result<MenuItem, DomainError>;
    /// Insert a batch in one transaction, in slice order. Used by version
    /// copies, where parents precede children.
    async fn create_many(&self, items: &[MenuItem]) -> Result<(), DomainError>;
    async fn update(&self, item: &MenuItem) -> Result<MenuItem, DomainError>;
    /// Delete an item and its whole subtree; returns the number of rows
    /// removed.
    async fn delete_subtree(
        &self,
        menu_content_id: &Uuid,
        item_id: &Uuid,
    ) -> Result<u64, DomainError>;
    /// Next free sibling position under a parent.
    async fn next_position(
        &self,
        menu_content_id: &Uuid,
        parent_id: &Uuid,
    ) -> Result<i32, DomainError>;
}
