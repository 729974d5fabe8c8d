// ============================================================================
// Sitenav Core - Menu Service
// File: crates/sitenav-core/src/services/menu_service.rs
// ============================================================================
//! Menu administration flows: content creation, version copies, and item
//! CRUD scoped to a menu content.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::domain::{ContentRef, ContentVersion, LinkTarget, Menu, MenuContent, MenuItem};
use crate::error::DomainError;
use crate::repositories::{MenuContentRepository, MenuItemRepository, MenuRepository};
use crate::tree::MenuTree;
use crate::versioning::{VersionState, VersioningConfig};

/// Scope carried by admin item requests. Add and change rights on items
/// exist only inside a specific menu content.
#[derive(Debug, Clone, Copy, Default)]
pub struct MenuItemContext {
    pub menu_content_id: Option<Uuid>,
}

/// Whether an item may be added under the given scope.
pub fn can_add_item(ctx: &MenuItemContext) -> bool {
    ctx.menu_content_id.is_some()
}

/// Whether an item may be changed: either the request is scoped to a menu
/// content, or it addresses a specific pre-existing item.
pub fn can_change_item(ctx: &MenuItemContext, item_id: Option<Uuid>) -> bool {
    ctx.menu_content_id.is_some() || item_id.is_some()
}

/// Input for adding an item. A missing `parent_id` means "under the root".
#[derive(Debug, Clone, Deserialize)]
pub struct NewMenuItem {
    pub parent_id: Option<Uuid>,
    pub title: String,
    pub content: ContentRef,
    #[serde(default)]
    pub link_target: LinkTarget,
    #[serde(default)]
    pub soft_root: bool,
}

/// Partial update for an item. `parent_id` reparents the item; the new
/// position is the last slot under the new parent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateMenuItem {
    pub title: Option<String>,
    pub content: Option<ContentRef>,
    pub link_target: Option<LinkTarget>,
    pub soft_root: Option<bool>,
    pub parent_id: Option<Uuid>,
}

/// Item plus its depth in the tree, for admin listings.
#[derive(Debug, Clone, Serialize)]
pub struct MenuItemNode {
    #[serde(flatten)]
    pub item: MenuItem,
    pub depth: u32,
}

pub struct MenuService<M, C, I>
where
    M: MenuRepository,
    C: MenuContentRepository,
    I: MenuItemRepository,
{
    menu_repo: Arc<M>,
    content_repo: Arc<C>,
    item_repo: Arc<I>,
    versioning: VersioningConfig,
}

impl<M, C, I> MenuService<M, C, I>
where
    M: MenuRepository,
    C: MenuContentRepository,
    I: MenuItemRepository,
{
    pub fn new(
        menu_repo: Arc<M>,
        content_repo: Arc<C>,
        item_repo: Arc<I>,
        versioning: VersioningConfig,
    ) -> Self {
        Self {
            menu_repo,
            content_repo,
            item_repo,
            versioning,
        }
    }

    /// Create a menu content for the first time: the grouper, the root item,
    /// and the content row come into existence together.
    pub async fn create_menu_content(
        &self,
        title: &str,
        site_id: Uuid,
        created_by: Option<Uuid>,
    ) -> Result<MenuContent, DomainError> {
        let identifier = slug::slugify(title);
        info!("Creating menu content '{}' (identifier {})", title, identifier);

        // 1. Grouper identifier must be unique per site
        if self
            .menu_repo
            .find_by_identifier(&site_id, &identifier)
            .await?
            .is_some()
        {
            return Err(DomainError::IdentifierAlreadyExists {
                site_id,
                identifier,
            });
        }

        // 2. Create the grouper
        let menu = Menu::new(site_id, identifier, created_by)
            .map_err(|e| DomainError::ValidationError(e.to_string()))?;
        let menu = self.menu_repo.create(&menu).await?;

        // 3. Root item and content row reference each other; allocate the
        // content id up front
        let content_id = Uuid::new_v4();
        let root = MenuItem::new_root(content_id, title.to_string(), created_by)
            .map_err(|e| DomainError::ValidationError(e.to_string()))?;

        let initial_state = if self.versioning.enabled {
            VersionState::Draft
        } else {
            VersionState::Published
        };
        let content = MenuContent::new(
            content_id,
            menu.id,
            title.to_string(),
            root.id,
            ContentVersion::first(initial_state),
            created_by,
        )
        .map_err(|e| DomainError::ValidationError(e.to_string()))?;

        let content = self.content_repo.create(&content).await?;
        self.item_repo.create(&root).await?;

        info!("Menu content created: {} (menu {})", content.id, menu.id);
        Ok(content)
    }

    /// Copy the newest content of a menu into a fresh draft version with a
    /// deep copy of its tree.
    pub async fn create_draft_version(
        &self,
        menu_id: Uuid,
        created_by: Option<Uuid>,
    ) -> Result<MenuContent, DomainError> {
        self.menu_repo
            .find_by_id(&menu_id)
            .await?
            .ok_or(DomainError::MenuNotFound(menu_id))?;

        let contents = self.content_repo.list_for_menu(&menu_id).await?;
        let source = contents
            .first()
            .ok_or(DomainError::MenuHasNoContent(menu_id))?;

        let items = self.item_repo.list_for_content(&source.id).await?;
        let tree = MenuTree::from_items(items)?;

        // Walk the source tree in pre-order so every clone sees its parent's
        // new id already mapped.
        let new_content_id = Uuid::new_v4();
        let mut id_map: HashMap<Uuid, Uuid> = HashMap::new();
        let mut clones: Vec<MenuItem> = Vec::with_capacity(tree.len());
        let mut source_items = vec![tree.root()];
        source_items.extend(tree.descendants());
        for item in source_items {
            let new_id = Uuid::new_v4();
            id_map.insert(item.id, new_id);
            clones.push(MenuItem {
                id: new_id,
                menu_content_id: new_content_id,
                parent_id: item.parent_id.map(|p| id_map[&p]),
                position: item.position,
                title: item.title.clone(),
                content: item.content.clone(),
                link_target: item.link_target,
                soft_root: item.soft_root,
                created_at: Utc::now(),
                created_by,
            });
        }

        let content = MenuContent::new(
            new_content_id,
            menu_id,
            source.title.clone(),
            id_map[&tree.root_id()],
            source.version.next(VersionState::Draft),
            created_by,
        )
        .map_err(|e| DomainError::ValidationError(e.to_string()))?;

        let content = self.content_repo.create(&content).await?;
        self.item_repo.create_many(&clones).await?;

        info!(
            "Draft version {} created for menu {} ({} items copied)",
            content.version.number,
            menu_id,
            clones.len()
        );
        Ok(content)
    }

    /// Store a new state on a content's version. Transition legality is the
    /// versioning collaborator's concern, not checked here.
    pub async fn set_version_state(
        &self,
        content_id: Uuid,
        state: VersionState,
    ) -> Result<MenuContent, DomainError> {
        self.content_repo
            .find_by_id(&content_id)
            .await?
            .ok_or(DomainError::MenuContentNotFound(content_id))?;
        self.content_repo.set_version_state(&content_id, state).await
    }

    pub async fn list_contents(&self) -> Result<Vec<MenuContent>, DomainError> {
        self.content_repo.list_all().await
    }

    /// One content's items in tree order (root first), each with its depth.
    pub async fn list_items(
        &self,
        menu_content_id: Uuid,
    ) -> Result<Vec<MenuItemNode>, DomainError> {
        self.require_content(menu_content_id).await?;
        let items = self.item_repo.list_for_content(&menu_content_id).await?;
        let tree = MenuTree::from_items(items)?;

        let mut ordered = vec![tree.root()];
        ordered.extend(tree.descendants());
        Ok(ordered
            .into_iter()
            .map(|item| MenuItemNode {
                depth: tree.depth_of(item.id).unwrap_or(1),
                item: item.clone(),
            })
            .collect())
    }

    pub async fn add_item(
        &self,
        menu_content_id: Uuid,
        new_item: NewMenuItem,
        created_by: Option<Uuid>,
    ) -> Result<MenuItem, DomainError> {
        let content = self.require_content(menu_content_id).await?;

        let parent_id = new_item.parent_id.unwrap_or(content.root_id);
        let parent = self
            .item_repo
            .find_by_id(&parent_id)
            .await?
            .ok_or(DomainError::MenuItemNotFound(parent_id))?;
        if parent.menu_content_id != menu_content_id {
            return Err(DomainError::ItemOutsideContent {
                item: parent_id,
                menu_content: menu_content_id,
            });
        }

        let position = self
            .item_repo
            .next_position(&menu_content_id, &parent_id)
            .await?;
        let item = MenuItem::new_child(
            menu_content_id,
            parent_id,
            position,
            new_item.title,
            new_item.content,
            new_item.link_target,
            new_item.soft_root,
            created_by,
        )
        .map_err(|e| DomainError::ValidationError(e.to_string()))?;

        self.item_repo.create(&item).await
    }

    pub async fn change_item(
        &self,
        menu_content_id: Uuid,
        item_id: Uuid,
        changes: UpdateMenuItem,
    ) -> Result<MenuItem, DomainError> {
        self.require_content(menu_content_id).await?;
        let mut item = self.require_item(menu_content_id, item_id).await?;

        if let Some(new_parent) = changes.parent_id {
            let items = self.item_repo.list_for_content(&menu_content_id).await?;
            let tree = MenuTree::from_items(items)?;
            tree.validate_move(item_id, new_parent)?;
            item.parent_id = Some(new_parent);
            item.position = self
                .item_repo
                .next_position(&menu_content_id, &new_parent)
                .await?;
        }

        if let Some(title) = changes.title {
            item.title = title.trim().to_string();
        }
        if let Some(content) = changes.content {
            if item.is_root() {
                return Err(DomainError::ValidationError(
                    "root item cannot link to content".to_string(),
                ));
            }
            item.content = Some(content);
        }
        if let Some(link_target) = changes.link_target {
            item.link_target = link_target;
        }
        if let Some(soft_root) = changes.soft_root {
            item.soft_root = soft_root;
        }

        validator::Validate::validate(&item)
            .map_err(|e| DomainError::ValidationError(e.to_string()))?;
        self.item_repo.update(&item).await
    }

    /// Change a pre-existing item addressed without a menu-content scope.
    /// The item's own content provides the scope.
    pub async fn change_item_direct(
        &self,
        item_id: Uuid,
        changes: UpdateMenuItem,
    ) -> Result<MenuItem, DomainError> {
        let item = self
            .item_repo
            .find_by_id(&item_id)
            .await?
            .ok_or(DomainError::MenuItemNotFound(item_id))?;
        self.change_item(item.menu_content_id, item_id, changes).await
    }

    /// Remove an item and its whole subtree. The root item never goes away
    /// on its own; the content does.
    pub async fn remove_item(
        &self,
        menu_content_id: Uuid,
        item_id: Uuid,
    ) -> Result<u64, DomainError> {
        self.require_content(menu_content_id).await?;
        let item = self.require_item(menu_content_id, item_id).await?;
        if item.is_root() {
            return Err(DomainError::RootItemImmovable(item_id));
        }
        let removed = self
            .item_repo
            .delete_subtree(&menu_content_id, &item_id)
            .await?;
        info!("Removed {} item(s) under {}", removed, item_id);
        Ok(removed)
    }

    async fn require_content(&self, menu_content_id: Uuid) -> Result<MenuContent, DomainError> {
        self.content_repo
            .find_by_id(&menu_content_id)
            .await?
            .ok_or(DomainError::MenuContentNotFound(menu_content_id))
    }

    async fn require_item(
        &self,
        menu_content_id: Uuid,
        item_id: Uuid,
    ) -> Result<MenuItem, DomainError> {
        let item = self
            .item_repo
            .find_by_id(&item_id)
            .await?
            .ok_or(DomainError::MenuItemNotFound(item_id))?;
        if item.menu_content_id != menu_content_id {
            return Err(DomainError::ItemOutsideContent {
                item: item_id,
                menu_content: menu_content_id,
            });
        }
        Ok(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::{
        MockMenuContentRepository, MockMenuItemRepository, MockMenuRepository,
    };

    fn service(
        menu_repo: MockMenuRepository,
        content_repo: MockMenuContentRepository,
        item_repo: MockMenuItemRepository,
    ) -> MenuService<MockMenuRepository, MockMenuContentRepository, MockMenuItemRepository> {
        MenuService::new(
            Arc::new(menu_repo),
            Arc::new(content_repo),
            Arc::new(item_repo),
            VersioningConfig::default(),
        )
    }

    #[test]
    fn test_item_authorization_scope() {
        let scoped = MenuItemContext {
            menu_content_id: Some(Uuid::new_v4()),
        };
        let unscoped = MenuItemContext::default();

        assert!(can_add_item(&scoped));
        assert!(!can_add_item(&unscoped));

        assert!(can_change_item(&scoped, None));
        assert!(can_change_item(&unscoped, Some(Uuid::new_v4())));
        assert!(!can_change_item(&unscoped, None));
    }

    #[tokio::test]
    async fn test_create_menu_content_wires_grouper_root_and_content() {
        let site_id = Uuid::new_v4();

        let mut menu_repo = MockMenuRepository::new();
        menu_repo
            .expect_find_by_identifier()
            .withf(move |s, ident| *s == site_id && ident == "main-navigation")
            .returning(|_, _| Ok(None));
        menu_repo.expect_create().returning(|m| Ok(m.clone()));

        let mut content_repo = MockMenuContentRepository::new();
        content_repo
            .expect_create()
            .withf(|c| c.version.number == 1 && c.version.state == VersionState::Draft)
            .returning(|c| Ok(c.clone()));

        let mut item_repo = MockMenuItemRepository::new();
        item_repo
            .expect_create()
            .withf(|item| item.is_root() && item.title == "Main Navigation")
            .returning(|item| Ok(item.clone()));

        let content = service(menu_repo, content_repo, item_repo)
            .create_menu_content("Main Navigation", site_id, None)
            .await
            .unwrap();

        assert_eq!(content.title, "Main Navigation");
    }

    #[tokio::test]
    async fn test_create_menu_content_rejects_duplicate_identifier() {
        let site_id = Uuid::new_v4();
        let existing = Menu::new(site_id, "main-navigation".to_string(), None).unwrap();

        let mut menu_repo = MockMenuRepository::new();
        menu_repo
            .expect_find_by_identifier()
            .returning(move |_, _| Ok(Some(existing.clone())));

        let result = service(
            menu_repo,
            MockMenuContentRepository::new(),
            MockMenuItemRepository::new(),
        )
        .create_menu_content("Main Navigation", site_id, None)
        .await;

        assert!(matches!(
            result,
            Err(DomainError::IdentifierAlreadyExists { .. })
        ));
    }

    #[tokio::test]
    async fn test_create_draft_version_copies_tree_shape() {
        let menu = Menu::new(Uuid::new_v4(), "main".to_string(), None).unwrap();
        let menu_id = menu.id;

        let content_id = Uuid::new_v4();
        let root = MenuItem::new_root(content_id, "main".to_string(), None).unwrap();
        let child = MenuItem::new_child(
            content_id,
            root.id,
            0,
            "About".to_string(),
            ContentRef::Page { id: Uuid::new_v4() },
            LinkTarget::default(),
            true,
            None,
        )
        .unwrap();
        let source = MenuContent::new(
            content_id,
            menu_id,
            "main".to_string(),
            root.id,
            ContentVersion::first(VersionState::Published),
            None,
        )
        .unwrap();

        let mut menu_repo = MockMenuRepository::new();
        menu_repo
            .expect_find_by_id()
            .returning(move |_| Ok(Some(menu.clone())));

        let mut content_repo = MockMenuContentRepository::new();
        let source_clone = source.clone();
        content_repo
            .expect_list_for_menu()
            .returning(move |_| Ok(vec![source_clone.clone()]));
        content_repo
            .expect_create()
            .withf(|c| c.version.number == 2 && c.version.state == VersionState::Draft)
            .returning(|c| Ok(c.clone()));

        let mut item_repo = MockMenuItemRepository::new();
        let items = vec![root.clone(), child.clone()];
        item_repo
            .expect_list_for_content()
            .returning(move |_| Ok(items.clone()));
        let old_ids = [root.id, child.id];
        item_repo
            .expect_create_many()
            .withf(move |clones| {
                clones.len() == 2
                    && clones[0].is_root()
                    && clones[1].parent_id == Some(clones[0].id)
                    && clones[1].soft_root
                    && clones.iter().all(|c| !old_ids.contains(&c.id))
            })
            .returning(|_| Ok(()));

        let draft = service(menu_repo, content_repo, item_repo)
            .create_draft_version(menu_id, None)
            .await
            .unwrap();

        assert_ne!(draft.id, content_id);
        assert_ne!(draft.root_id, root.id);
    }

    #[tokio::test]
    async fn test_add_item_defaults_to_root_parent() {
        let content_id = Uuid::new_v4();
        let root = MenuItem::new_root(content_id, "main".to_string(), None).unwrap();
        let content = MenuContent::new(
            content_id,
            Uuid::new_v4(),
            "main".to_string(),
            root.id,
            ContentVersion::first(VersionState::Draft),
            None,
        )
        .unwrap();

        let mut content_repo = MockMenuContentRepository::new();
        content_repo
            .expect_find_by_id()
            .returning(move |_| Ok(Some(content.clone())));

        let mut item_repo = MockMenuItemRepository::new();
        let root_clone = root.clone();
        item_repo
            .expect_find_by_id()
            .returning(move |_| Ok(Some(root_clone.clone())));
        item_repo.expect_next_position().returning(|_, _| Ok(3));
        item_repo.expect_create().returning(|item| Ok(item.clone()));

        let item = service(MockMenuRepository::new(), content_repo, item_repo)
            .add_item(
                content_id,
                NewMenuItem {
                    parent_id: None,
                    title: "About".to_string(),
                    content: ContentRef::External {
                        url: "https://example.com/about".to_string(),
                    },
                    link_target: LinkTarget::default(),
                    soft_root: false,
                },
                None,
            )
            .await
            .unwrap();

        assert_eq!(item.parent_id, Some(root.id));
        assert_eq!(item.position, 3);
    }

    #[tokio::test]
    async fn test_remove_root_item_is_rejected() {
        let content_id = Uuid::new_v4();
        let root = MenuItem::new_root(content_id, "main".to_string(), None).unwrap();
        let content = MenuContent::new(
            content_id,
            Uuid::new_v4(),
            "main".to_string(),
            root.id,
            ContentVersion::first(VersionState::Draft),
            None,
        )
        .unwrap();

        let mut content_repo = MockMenuContentRepository::new();
        content_repo
            .expect_find_by_id()
            .returning(move |_| Ok(Some(content.clone())));

        let mut item_repo = MockMenuItemRepository::new();
        let root_id = root.id;
        item_repo
            .expect_find_by_id()
            .returning(move |_| Ok(Some(root.clone())));

        let result = service(MockMenuRepository::new(), content_repo, item_repo)
            .remove_item(content_id, root_id)
            .await;

        assert!(matches!(result, Err(DomainError::RootItemImmovable(_))));
    }

    #[tokio::test]
    async fn test_change_item_from_another_content_is_rejected() {
        let content_id = Uuid::new_v4();
        let root = MenuItem::new_root(content_id, "main".to_string(), None).unwrap();
        let content = MenuContent::new(
            content_id,
            Uuid::new_v4(),
            "main".to_string(),
            root.id,
            ContentVersion::first(VersionState::Draft),
            None,
        )
        .unwrap();
        let foreign = MenuItem::new_child(
            Uuid::new_v4(),
            Uuid::new_v4(),
            0,
            "foreign".to_string(),
            ContentRef::External {
                url: "https://example.com/".to_string(),
            },
            LinkTarget::default(),
            false,
            None,
        )
        .unwrap();

        let mut content_repo = MockMenuContentRepository::new();
        content_repo
            .expect_find_by_id()
            .returning(move |_| Ok(Some(content.clone())));

        let mut item_repo = MockMenuItemRepository::new();
        let foreign_id = foreign.id;
        item_repo
            .expect_find_by_id()
            .returning(move |_| Ok(Some(foreign.clone())));

        let result = service(MockMenuRepository::new(), content_repo, item_repo)
            .change_item(
                content_id,
                foreign_id,
                UpdateMenuItem {
                    title: Some("renamed".to_string()),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(
            result,
            Err(DomainError::ItemOutsideContent { .. })
        ));
    }
}
