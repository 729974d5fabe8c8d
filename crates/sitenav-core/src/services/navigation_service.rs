// ============================================================================
// Sitenav Core - Navigation Service
// File: crates/sitenav-core/src/services/navigation_service.rs
// ============================================================================
//! Render-side entry points: select the current content per grouper, load
//! the trees, and hand the host a flat node list.

use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use crate::domain::{MenuContent, MenuItem, UrlResolver};
use crate::error::DomainError;
use crate::navigation::{build_nodes, NavigationNode, NavigationSelector};
use crate::repositories::{MenuContentRepository, MenuItemRepository};
use crate::tree::MenuTree;
use crate::versioning::{VersioningConfig, VersioningFilter};

pub struct NavigationService<C, I>
where
    C: MenuContentRepository,
    I: MenuItemRepository,
{
    content_repo: Arc<C>,
    item_repo: Arc<I>,
    resolver: Arc<dyn UrlResolver>,
    filter: VersioningFilter,
    selector: NavigationSelector,
}

impl<C, I> NavigationService<C, I>
where
    C: MenuContentRepository,
    I: MenuItemRepository,
{
    pub fn new(
        content_repo: Arc<C>,
        item_repo: Arc<I>,
        resolver: Arc<dyn UrlResolver>,
        versioning: VersioningConfig,
    ) -> Self {
        Self {
            content_repo,
            item_repo,
            resolver,
            filter: VersioningFilter::new(versioning),
            selector: NavigationSelector::new(),
        }
    }

    /// The current content per grouper, in stable grouper order.
    pub async fn current_contents(
        &self,
        draft_mode: bool,
    ) -> Result<Vec<MenuContent>, DomainError> {
        let contents = self.content_repo.list_all().await?;
        Ok(self.filter.current_contents(contents, draft_mode))
    }

    /// Root items of the selected contents, in grouper order.
    pub async fn get_roots(&self, draft_mode: bool) -> Result<Vec<MenuItem>, DomainError> {
        let mut roots = Vec::new();
        for content in self.current_contents(draft_mode).await? {
            let root = self
                .item_repo
                .find_by_id(&content.root_id)
                .await?
                .ok_or(DomainError::MenuItemNotFound(content.root_id))?;
            roots.push(root);
        }
        debug!("Selected {} menu root(s)", roots.len());
        Ok(roots)
    }

    /// The full node list for the host renderer: per selected grouper, one
    /// anchor node followed by the tree's items in pre-order.
    pub async fn get_nodes(&self, draft_mode: bool) -> Result<Vec<NavigationNode>, DomainError> {
        let mut trees = Vec::new();
        for content in self.current_contents(draft_mode).await? {
            let items = self.item_repo.list_for_content(&content.id).await?;
            trees.push(MenuTree::from_items(items)?);
        }
        let nodes = build_nodes(&trees, self.resolver.as_ref()).await?;
        debug!("Adapted {} tree(s) into {} node(s)", trees.len(), nodes.len());
        Ok(nodes)
    }

    /// Apply the namespace selector over a node list.
    pub fn select(
        &self,
        nodes: &[NavigationNode],
        namespace: Option<Uuid>,
    ) -> Vec<NavigationNode> {
        self.selector.modify(nodes, namespace, None, false, false)
    }

    /// Node list for one menu, as a plugin render needs it: the full list
    /// cut down to the menu's current subtree. A menu with nothing visible
    /// renders empty.
    pub async fn render_for_menu(
        &self,
        menu_id: Uuid,
        draft_mode: bool,
    ) -> Result<Vec<NavigationNode>, DomainError> {
        let contents = self.content_repo.list_for_menu(&menu_id).await?;
        let current = self.filter.current_contents(contents, draft_mode);
        let Some(content) = current.first() else {
            return Ok(Vec::new());
        };
        let nodes = self.get_nodes(draft_mode).await?;
        Ok(self.select(&nodes, Some(content.root_id)))
    }
}
