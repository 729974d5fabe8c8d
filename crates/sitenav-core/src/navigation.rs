// ============================================================================
// Sitenav Core - Navigation Node Adaptation
// File: crates/sitenav-core/src/navigation.rs
// Description: Flattens menu trees into the host renderer's node list
// ============================================================================
//! Adaptation of menu trees to the host menu system's generic contract.
//!
//! Each selected tree contributes one anchor node (the grouper's handle in
//! the node list, never rendered as a clickable entry) followed by its items
//! depth-first in sibling order. The host consumes the flat list through
//! `id`/`parent_id` links and the attribute map; soft-root truncation and
//! deeper cuts happen on its side.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use uuid::Uuid;

use crate::domain::UrlResolver;
use crate::error::DomainError;
use crate::tree::MenuTree;

/// Generic node handed to the host menu renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationNode {
    pub id: Uuid,
    pub title: String,
    pub url: String,
    pub parent_id: Option<Uuid>,
    pub attr: Map<String, Value>,
}

impl NavigationNode {
    /// Anchor node for one tree: empty title and url, no parent, no
    /// attributes. Its id is the tree's root item id.
    fn anchor(root_id: Uuid) -> Self {
        Self {
            id: root_id,
            title: String::new(),
            url: String::new(),
            parent_id: None,
            attr: Map::new(),
        }
    }
}

/// Convert trees to the flat node list, in the given tree order.
///
/// Every item's content reference is resolved to an absolute URL through
/// `resolver`; a dangling reference propagates as the resolver's error.
pub async fn build_nodes(
    trees: &[MenuTree],
    resolver: &dyn UrlResolver,
) -> Result<Vec<NavigationNode>, DomainError> {
    let mut nodes = Vec::new();
    for tree in trees {
        nodes.push(NavigationNode::anchor(tree.root_id()));
        for item in tree.descendants() {
            let url = match &item.content {
                Some(content) => resolver.resolve_url(content).await?,
                None => String::new(),
            };
            let mut attr = Map::new();
            attr.insert("link_target".to_string(), json!(item.link_target.as_str()));
            attr.insert("soft_root".to_string(), json!(item.soft_root));
            nodes.push(NavigationNode {
                id: item.id,
                title: item.title.clone(),
                url,
                parent_id: item.parent_id,
                attr,
            });
        }
    }
    Ok(nodes)
}

/// Selects the subtree a render should show.
///
/// Runs on the pre-cut pass only; the post-cut and breadcrumb passes leave
/// the list untouched. The subtree root is the node matching `namespace`
/// (falling back to the first node when absent or unmatched), and the
/// result is that root's descendants, flat, in their original pre-order.
/// Pure: identical inputs give identical output.
#[derive(Debug, Default)]
pub struct NavigationSelector;

impl NavigationSelector {
    pub fn new() -> Self {
        Self
    }

    pub fn modify(
        &self,
        nodes: &[NavigationNode],
        namespace: Option<Uuid>,
        _root_id: Option<Uuid>,
        post_cut: bool,
        breadcrumb: bool,
    ) -> Vec<NavigationNode> {
        if post_cut || breadcrumb {
            return nodes.to_vec();
        }
        let Some(first) = nodes.first() else {
            return Vec::new();
        };
        let root = namespace
            .and_then(|ns| nodes.iter().find(|n| n.id == ns))
            .unwrap_or(first);

        // Pre-order input means a parent is always seen before its
        // children, so one pass collects the whole subtree.
        let mut in_subtree: HashSet<Uuid> = HashSet::from([root.id]);
        let mut result = Vec::new();
        for node in nodes {
            if node.id == root.id {
                continue;
            }
            if let Some(parent_id) = node.parent_id {
                if in_subtree.contains(&parent_id) {
                    in_subtree.insert(node.id);
                    result.push(node.clone());
                }
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ContentRef, LinkTarget, MenuItem};
    use async_trait::async_trait;

    /// Resolver used by tests: pages become `/pages/{id}/`, external URLs
    /// pass through.
    struct PathResolver;

    #[async_trait]
    impl UrlResolver for PathResolver {
        async fn resolve_url(&self, content: &ContentRef) -> Result<String, DomainError> {
            match content {
                ContentRef::Page { id } => Ok(format!("/pages/{}/", id)),
                ContentRef::External { url } => Ok(url.clone()),
            }
        }
    }

    fn child(menu_content_id: Uuid, parent: Uuid, position: i32, title: &str) -> MenuItem {
        MenuItem::new_child(
            menu_content_id,
            parent,
            position,
            title.to_string(),
            ContentRef::Page { id: Uuid::new_v4() },
            LinkTarget::default(),
            false,
            None,
        )
        .unwrap()
    }

    fn tree_of(items: Vec<MenuItem>) -> MenuTree {
        MenuTree::from_items(items).unwrap()
    }

    #[tokio::test]
    async fn test_build_nodes_two_trees() {
        let content_a = Uuid::new_v4();
        let root_a = MenuItem::new_root(content_a, "A".to_string(), None).unwrap();
        let child1 = child(content_a, root_a.id, 0, "child1");
        let grandchild = child(content_a, child1.id, 0, "grandchild");

        let content_b = Uuid::new_v4();
        let root_b = MenuItem::new_root(content_b, "B".to_string(), None).unwrap();
        let child2 = child(content_b, root_b.id, 0, "child2");

        let trees = vec![
            tree_of(vec![root_a.clone(), child1.clone(), grandchild.clone()]),
            tree_of(vec![root_b.clone(), child2.clone()]),
        ];
        let nodes = build_nodes(&trees, &PathResolver).await.unwrap();

        assert_eq!(nodes.len(), 5);

        // Anchor of the first tree.
        assert_eq!(nodes[0].id, root_a.id);
        assert_eq!(nodes[0].title, "");
        assert_eq!(nodes[0].url, "");
        assert_eq!(nodes[0].parent_id, None);
        assert!(nodes[0].attr.is_empty());

        // First-level child hangs off the anchor id.
        assert_eq!(nodes[1].id, child1.id);
        assert_eq!(nodes[1].title, "child1");
        assert_eq!(nodes[1].parent_id, Some(root_a.id));
        assert_eq!(nodes[1].attr["link_target"], json!("_self"));
        assert_eq!(nodes[1].attr["soft_root"], json!(false));

        assert_eq!(nodes[2].id, grandchild.id);
        assert_eq!(nodes[2].parent_id, Some(child1.id));

        // Second tree follows in grouper order.
        assert_eq!(nodes[3].id, root_b.id);
        assert_eq!(nodes[3].parent_id, None);
        assert_eq!(nodes[4].id, child2.id);
        assert_eq!(nodes[4].parent_id, Some(root_b.id));
    }

    #[tokio::test]
    async fn test_build_nodes_resolves_urls() {
        let content_id = Uuid::new_v4();
        let root = MenuItem::new_root(content_id, "root".to_string(), None).unwrap();
        let page_id = Uuid::new_v4();
        let mut linked = child(content_id, root.id, 0, "linked");
        linked.content = Some(ContentRef::Page { id: page_id });

        let nodes = build_nodes(&[tree_of(vec![root, linked])], &PathResolver)
            .await
            .unwrap();
        assert_eq!(nodes[1].url, format!("/pages/{}/", page_id));
    }

    #[tokio::test]
    async fn test_build_nodes_soft_root_attribute() {
        let content_id = Uuid::new_v4();
        let root = MenuItem::new_root(content_id, "root".to_string(), None).unwrap();
        let mut section = child(content_id, root.id, 0, "section");
        section.soft_root = true;

        let nodes = build_nodes(&[tree_of(vec![root, section])], &PathResolver)
            .await
            .unwrap();
        assert_eq!(nodes[1].attr["soft_root"], json!(true));
    }

    #[tokio::test]
    async fn test_build_nodes_pre_order_invariant() {
        let content_id = Uuid::new_v4();
        let root = MenuItem::new_root(content_id, "root".to_string(), None).unwrap();
        let a = child(content_id, root.id, 0, "a");
        let b = child(content_id, a.id, 0, "b");
        let c = child(content_id, b.id, 0, "c");
        let d = child(content_id, root.id, 1, "d");

        let nodes = build_nodes(&[tree_of(vec![root, a, b, c, d])], &PathResolver)
            .await
            .unwrap();

        // Every node appears after its parent.
        for (index, node) in nodes.iter().enumerate() {
            if let Some(parent_id) = node.parent_id {
                let parent_index = nodes.iter().position(|n| n.id == parent_id).unwrap();
                assert!(parent_index < index);
            }
        }
    }

    /// Two menus, fruit and vegetables, as flat pre-order node lists.
    fn selector_fixture() -> (Vec<NavigationNode>, Uuid, Uuid) {
        let fruit_root = Uuid::new_v4();
        let vegetables_root = Uuid::new_v4();
        let apples = Uuid::new_v4();
        let celery = Uuid::new_v4();
        let carrots = Uuid::new_v4();
        let purple_carrots = Uuid::new_v4();

        let entry = |id: Uuid, title: &str, url: &str, parent: Option<Uuid>| {
            let mut attr = Map::new();
            attr.insert("link_target".to_string(), json!("_self"));
            attr.insert("soft_root".to_string(), json!(false));
            NavigationNode {
                id,
                title: title.to_string(),
                url: url.to_string(),
                parent_id: parent,
                attr,
            }
        };

        let nodes = vec![
            NavigationNode::anchor(fruit_root),
            entry(apples, "Apples", "/fruit/apples/", Some(fruit_root)),
            NavigationNode::anchor(vegetables_root),
            entry(celery, "Celery", "/vegetables/celery/", Some(vegetables_root)),
            entry(carrots, "Carrots", "/vegetables/carrots/", Some(vegetables_root)),
            entry(
                purple_carrots,
                "Purple Carrots",
                "/vegetables/carrots/purple/",
                Some(carrots),
            ),
        ];
        (nodes, fruit_root, vegetables_root)
    }

    #[test]
    fn test_modify_with_namespace() {
        let (nodes, _, vegetables_root) = selector_fixture();
        let result =
            NavigationSelector::new().modify(&nodes, Some(vegetables_root), None, false, false);
        let titles: Vec<&str> = result.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["Celery", "Carrots", "Purple Carrots"]);
    }

    #[test]
    fn test_modify_without_namespace_uses_first_node() {
        let (nodes, _, _) = selector_fixture();
        let result = NavigationSelector::new().modify(&nodes, None, None, false, false);
        let titles: Vec<&str> = result.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["Apples"]);
    }

    #[test]
    fn test_modify_unmatched_namespace_falls_back_to_first() {
        let (nodes, _, _) = selector_fixture();
        let result =
            NavigationSelector::new().modify(&nodes, Some(Uuid::new_v4()), None, false, false);
        let titles: Vec<&str> = result.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["Apples"]);
    }

    #[test]
    fn test_modify_is_deterministic() {
        let (nodes, _, vegetables_root) = selector_fixture();
        let selector = NavigationSelector::new();
        let once = selector.modify(&nodes, Some(vegetables_root), None, false, false);
        let twice = selector.modify(&nodes, Some(vegetables_root), None, false, false);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_modify_leaves_post_cut_and_breadcrumb_untouched() {
        let (nodes, _, vegetables_root) = selector_fixture();
        let selector = NavigationSelector::new();
        assert_eq!(
            selector.modify(&nodes, Some(vegetables_root), None, true, false),
            nodes
        );
        assert_eq!(
            selector.modify(&nodes, Some(vegetables_root), None, false, true),
            nodes
        );
    }

    #[test]
    fn test_modify_empty_list() {
        let result = NavigationSelector::new().modify(&[], None, None, false, false);
        assert!(result.is_empty());
    }
}
