// ============================================================================
// Sitenav Core - Version Visibility Filter
// File: crates/sitenav-core/src/versioning.rs
// Description: Selects the current content row per menu grouper
// ============================================================================
//! Version-visibility policy.
//!
//! Given every stored content row in stable grouper order, the filter keeps
//! at most one row per grouper: the published one when rendering for the
//! public, the newest visible one when rendering in draft mode, or all rows
//! untouched when versioning is disabled. Groupers with nothing visible
//! simply drop out; that is not an error.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::MenuContent;

/// Lifecycle state of a content version. Transitions between states are
/// owned by the versioning collaborator; this service only reads them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VersionState {
    Draft,
    Published,
    Archived,
    Unpublished,
}

impl VersionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            VersionState::Draft => "draft",
            VersionState::Published => "published",
            VersionState::Archived => "archived",
            VersionState::Unpublished => "unpublished",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "draft" => Some(VersionState::Draft),
            "published" => Some(VersionState::Published),
            "archived" => Some(VersionState::Archived),
            "unpublished" => Some(VersionState::Unpublished),
            _ => None,
        }
    }

    /// Draft mode shows work in progress and live content; archived and
    /// unpublished versions stay hidden everywhere.
    pub fn visible_in_draft_mode(&self) -> bool {
        matches!(self, VersionState::Draft | VersionState::Published)
    }
}

/// Tie-break between visible versions sharing a creation timestamp in
/// draft mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftTieBreak {
    VersionNumber,
    ContentId,
}

impl DraftTieBreak {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "version_number" => Some(DraftTieBreak::VersionNumber),
            "content_id" => Some(DraftTieBreak::ContentId),
            _ => None,
        }
    }
}

impl Default for DraftTieBreak {
    fn default() -> Self {
        DraftTieBreak::VersionNumber
    }
}

/// Explicit policy handed to the filter at construction. No process-wide
/// toggles.
#[derive(Debug, Clone, Copy)]
pub struct VersioningConfig {
    pub enabled: bool,
    pub draft_tie_break: DraftTieBreak,
}

impl Default for VersioningConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            draft_tie_break: DraftTieBreak::default(),
        }
    }
}

pub struct VersioningFilter {
    config: VersioningConfig,
}

impl VersioningFilter {
    pub fn new(config: VersioningConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> VersioningConfig {
        self.config
    }

    /// Reduce all content rows to the current row per grouper.
    ///
    /// `contents` must already be in stable grouper order (grouper creation
    /// order); the result preserves that order and never reorders by state.
    pub fn current_contents(
        &self,
        contents: Vec<MenuContent>,
        draft_mode: bool,
    ) -> Vec<MenuContent> {
        if !self.config.enabled {
            return contents;
        }

        let mut grouper_order: Vec<Uuid> = Vec::new();
        let mut groups: HashMap<Uuid, Vec<MenuContent>> = HashMap::new();
        for content in contents {
            if !groups.contains_key(&content.menu_id) {
                grouper_order.push(content.menu_id);
            }
            groups.entry(content.menu_id).or_default().push(content);
        }

        grouper_order
            .into_iter()
            .filter_map(|menu_id| {
                let group = groups.remove(&menu_id).unwrap_or_default();
                self.select_current(group, draft_mode)
            })
            .collect()
    }

    /// State of the newest version within one grouper's rows, if any.
    pub fn latest_version_state(&self, group: &[MenuContent]) -> Option<VersionState> {
        group
            .iter()
            .max_by(|a, b| self.version_order(a, b))
            .map(|content| content.version.state)
    }

    fn select_current(&self, group: Vec<MenuContent>, draft_mode: bool) -> Option<MenuContent> {
        group
            .into_iter()
            .filter(|content| {
                if draft_mode {
                    content.version.state.visible_in_draft_mode()
                } else {
                    content.version.state == VersionState::Published
                }
            })
            .max_by(|a, b| self.version_order(a, b))
    }

    fn version_order(&self, a: &MenuContent, b: &MenuContent) -> Ordering {
        a.version
            .created_at
            .cmp(&b.version.created_at)
            .then_with(|| match self.config.draft_tie_break {
                DraftTieBreak::VersionNumber => a.version.number.cmp(&b.version.number),
                DraftTieBreak::ContentId => a.id.cmp(&b.id),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ContentVersion;
    use chrono::{Duration, Utc};

    fn content(menu_id: Uuid, number: i32, state: VersionState) -> MenuContent {
        let mut content = MenuContent::new(
            Uuid::new_v4(),
            menu_id,
            "menu".to_string(),
            Uuid::new_v4(),
            ContentVersion::first(state),
            None,
        )
        .unwrap();
        content.version.number = number;
        // Spread version creation times so "newest" is well defined.
        content.version.created_at = Utc::now() + Duration::seconds(number as i64);
        content
    }

    fn filter(enabled: bool) -> VersioningFilter {
        VersioningFilter::new(VersioningConfig {
            enabled,
            draft_tie_break: DraftTieBreak::default(),
        })
    }

    #[test]
    fn test_disabled_passes_everything_through() {
        let menu = Uuid::new_v4();
        let contents = vec![
            content(menu, 1, VersionState::Archived),
            content(menu, 2, VersionState::Draft),
        ];
        let result = filter(false).current_contents(contents.clone(), false);
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].id, contents[0].id);
    }

    #[test]
    fn test_published_mode_picks_published_row() {
        let menu = Uuid::new_v4();
        let published = content(menu, 2, VersionState::Published);
        let contents = vec![
            content(menu, 1, VersionState::Archived),
            published.clone(),
            content(menu, 3, VersionState::Draft),
        ];
        let result = filter(true).current_contents(contents, false);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, published.id);
    }

    #[test]
    fn test_published_mode_omits_grouper_without_published() {
        let menu = Uuid::new_v4();
        let contents = vec![
            content(menu, 1, VersionState::Archived),
            content(menu, 2, VersionState::Draft),
        ];
        let result = filter(true).current_contents(contents, false);
        assert!(result.is_empty());
    }

    #[test]
    fn test_draft_mode_prefers_newest_visible() {
        let menu = Uuid::new_v4();
        let draft = content(menu, 2, VersionState::Draft);
        let contents = vec![content(menu, 1, VersionState::Archived), draft.clone()];
        let result = filter(true).current_contents(contents, true);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, draft.id);
    }

    #[test]
    fn test_draft_mode_excludes_unpublished_only_grouper() {
        let menu = Uuid::new_v4();
        let contents = vec![content(menu, 1, VersionState::Unpublished)];
        let result = filter(true).current_contents(contents, true);
        assert!(result.is_empty());
    }

    #[test]
    fn test_grouper_order_is_preserved() {
        let menu_a = Uuid::new_v4();
        let menu_b = Uuid::new_v4();
        let a = content(menu_a, 1, VersionState::Published);
        let b = content(menu_b, 1, VersionState::Published);
        let result = filter(true).current_contents(vec![a.clone(), b.clone()], false);
        assert_eq!(
            result.iter().map(|c| c.menu_id).collect::<Vec<_>>(),
            vec![menu_a, menu_b]
        );
    }

    #[test]
    fn test_timestamp_tie_breaks_on_version_number() {
        let menu = Uuid::new_v4();
        let at = Utc::now();
        let mut older = content(menu, 1, VersionState::Draft);
        let mut newer = content(menu, 2, VersionState::Draft);
        older.version.created_at = at;
        newer.version.created_at = at;
        let result = filter(true).current_contents(vec![newer.clone(), older], true);
        assert_eq!(result[0].id, newer.id);
    }

    #[test]
    fn test_latest_version_state() {
        let menu = Uuid::new_v4();
        let group = vec![
            content(menu, 1, VersionState::Published),
            content(menu, 2, VersionState::Draft),
        ];
        assert_eq!(
            filter(true).latest_version_state(&group),
            Some(VersionState::Draft)
        );
        assert_eq!(filter(true).latest_version_state(&[]), None);
    }
}
