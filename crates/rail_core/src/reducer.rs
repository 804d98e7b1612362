//! Reducer actions, callback effects, and transition logic for the sidebar rail.

use std::collections::BTreeSet;

use thiserror::Error;

use crate::config::RailConfig;
use crate::model::{find_item, MenuItem, RailState};
use crate::render::ClickTarget;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Actions accepted by [`reduce_rail`] to mutate [`RailState`].
pub enum RailAction {
    /// Flip icon-only mode.
    ToggleCollapse,
    /// Force icon-only mode on or off (controlled hosts).
    SetCollapsed {
        /// Requested collapsed value.
        collapsed: bool,
    },
    /// A row was activated. Only enabled rows can produce the target.
    ClickItem(ClickTarget),
    /// Expand every expandable entry in the tree.
    ExpandAll,
    /// Collapse every entry.
    CollapseAll,
    /// Expand the ancestors of every `active` entry so it is visible.
    RevealActive,
    /// Forget expanded ids that no longer name an expandable entry in the tree.
    PruneExpanded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Callback intents emitted by [`reduce_rail`], executed in order by the view layer.
pub enum RailEffect {
    /// Notify the host that an entry was clicked. Payload is the entry as currently rendered.
    ItemClicked(MenuItem),
    /// Notify the host of the new collapsed value.
    CollapseChanged(bool),
    /// Ask the host to navigate to the entry's `href`.
    Navigate(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for actions the current rail cannot apply.
pub enum RailError {
    /// Collapse was requested on a rail configured as non-collapsible.
    #[error("rail is not collapsible")]
    CollapseDisabled,
    /// A click target no longer resolves to the same enabled entry in the current tree.
    #[error("click target `{key}` ({id}) is stale")]
    StaleTarget {
        /// Path key the target was rendered at.
        key: String,
        /// Entry id the target was rendered with.
        id: String,
    },
}

/// Applies a [`RailAction`] to the rail state and collects the host callbacks it triggers.
///
/// `items` is the tree currently being rendered. State is only touched when the action succeeds.
///
/// A click always reports [`RailEffect::ItemClicked`] first, including for expand-only entries.
/// Entries with children additionally toggle their id in [`RailState::expanded_ids`], and entries
/// with an `href` emit [`RailEffect::Navigate`]; for entries that have both, the configured
/// [`crate::ParentClickPolicy`] decides which of the two happen.
///
/// # Errors
///
/// Returns [`RailError::CollapseDisabled`] for collapse actions on a non-collapsible rail and
/// [`RailError::StaleTarget`] when a click target does not match the current tree.
pub fn reduce_rail(
    state: &mut RailState,
    config: &RailConfig,
    items: &[MenuItem],
    action: RailAction,
) -> Result<Vec<RailEffect>, RailError> {
    let mut effects = Vec::new();
    match action {
        RailAction::ToggleCollapse => {
            if !config.collapsible {
                return Err(RailError::CollapseDisabled);
            }
            state.collapsed = !state.collapsed;
            effects.push(RailEffect::CollapseChanged(state.collapsed));
        }
        RailAction::SetCollapsed { collapsed } => {
            if !config.collapsible {
                return Err(RailError::CollapseDisabled);
            }
            if state.collapsed != collapsed {
                state.collapsed = collapsed;
                effects.push(RailEffect::CollapseChanged(collapsed));
            }
        }
        RailAction::ClickItem(target) => {
            let item = find_item(items, target.path())
                .filter(|item| item.id == target.id() && !item.disabled)
                .ok_or_else(|| RailError::StaleTarget {
                    key: target.path().key(),
                    id: target.id().to_string(),
                })?;

            let linked_parent = item.is_expandable() && item.href.is_some();
            let toggles = item.is_expandable()
                && (!linked_parent || config.parent_click.toggles_linked_parent());
            let navigate = item
                .href
                .clone()
                .filter(|_| !linked_parent || config.parent_click.navigates_linked_parent());

            if toggles && !state.expanded_ids.remove(&item.id) {
                state.expanded_ids.insert(item.id.clone());
            }
            effects.push(RailEffect::ItemClicked(item.clone()));
            if let Some(href) = navigate {
                effects.push(RailEffect::Navigate(href));
            }
        }
        RailAction::ExpandAll => {
            let mut expandable = BTreeSet::new();
            collect_expandable_ids(items, &mut expandable);
            state.expanded_ids = expandable;
        }
        RailAction::CollapseAll => state.expanded_ids.clear(),
        RailAction::RevealActive => {
            prune_expanded_ids(items, &mut state.expanded_ids);
            let mut ancestors = Vec::new();
            collect_active_ancestors(items, &mut ancestors, &mut state.expanded_ids);
        }
        RailAction::PruneExpanded => prune_expanded_ids(items, &mut state.expanded_ids),
    }
    Ok(effects)
}

fn collect_expandable_ids(items: &[MenuItem], out: &mut BTreeSet<String>) {
    for item in items.iter().filter(|item| item.is_expandable()) {
        out.insert(item.id.clone());
        collect_expandable_ids(&item.children, out);
    }
}

fn prune_expanded_ids(items: &[MenuItem], expanded_ids: &mut BTreeSet<String>) {
    if expanded_ids.is_empty() {
        return;
    }
    let mut known = BTreeSet::new();
    collect_expandable_ids(items, &mut known);
    expanded_ids.retain(|id| known.contains(id));
}

fn collect_active_ancestors<'a>(
    items: &'a [MenuItem],
    ancestors: &mut Vec<&'a str>,
    out: &mut BTreeSet<String>,
) {
    for item in items {
        if item.active {
            out.extend(ancestors.iter().map(|id| id.to_string()));
        }
        if item.is_expandable() {
            ancestors.push(&item.id);
            collect_active_ancestors(&item.children, ancestors, out);
            ancestors.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::config::ParentClickPolicy;
    use crate::render::{render_rows, RenderedRow};

    fn home_settings() -> Vec<MenuItem> {
        vec![
            MenuItem::new("a", "Home"),
            MenuItem::new("b", "Settings").with_children([MenuItem::new("b1", "Profile")]),
        ]
    }

    fn row<'a>(rows: &'a [RenderedRow], id: &str) -> &'a RenderedRow {
        rows.iter().find(|row| row.id == id).expect("row present")
    }

    fn click(
        state: &mut RailState,
        config: &RailConfig,
        items: &[MenuItem],
        id: &str,
    ) -> Result<Vec<RailEffect>, RailError> {
        let rows = render_rows(items, state, config);
        let target = row(&rows, id).click_target().expect("enabled row");
        reduce_rail(state, config, items, RailAction::ClickItem(target))
    }

    fn clicked_count(effects: &[RailEffect]) -> usize {
        effects
            .iter()
            .filter(|effect| matches!(effect, RailEffect::ItemClicked(_)))
            .count()
    }

    #[test]
    fn leaf_click_notifies_once_without_touching_expansion() {
        let items = home_settings();
        let config = RailConfig::default();
        let mut state = RailState::new(&config);

        let effects = click(&mut state, &config, &items, "a").expect("click leaf");

        assert_eq!(effects, vec![RailEffect::ItemClicked(items[0].clone())]);
        assert!(state.expanded_ids.is_empty());
    }

    #[test]
    fn parent_click_notifies_once_and_toggles_membership() {
        let items = home_settings();
        let config = RailConfig::default();
        let mut state = RailState::new(&config);
        let original = state.clone();

        let effects = click(&mut state, &config, &items, "b").expect("expand");
        assert_eq!(effects, vec![RailEffect::ItemClicked(items[1].clone())]);
        assert!(state.is_expanded("b"));

        let effects = click(&mut state, &config, &items, "b").expect("collapse");
        assert_eq!(clicked_count(&effects), 1);
        assert_eq!(state, original);
    }

    #[test]
    fn settings_example_shows_profile_one_level_deeper() {
        let items = home_settings();
        let config = RailConfig::default();
        let mut state = RailState::new(&config);

        click(&mut state, &config, &items, "b").expect("expand settings");
        let rows = render_rows(&items, &state, &config);
        let labels: Vec<_> = rows.iter().filter_map(|row| row.label.as_deref()).collect();
        assert_eq!(labels, vec!["Home", "Settings", "Profile"]);
        let settings = row(&rows, "b");
        let profile = row(&rows, "b1");
        assert_eq!(profile.depth, settings.depth + 1);
        assert_eq!(
            profile.inset.px(),
            settings.inset.px() + config.indent_unit_px
        );

        click(&mut state, &config, &items, "b").expect("collapse settings");
        let rows = render_rows(&items, &state, &config);
        assert!(rows.iter().all(|row| row.id != "b1"));
    }

    #[test]
    fn disabled_items_never_produce_click_effects() {
        let items = vec![
            MenuItem::new("leaf", "Leaf").disabled(),
            MenuItem::new("parent", "Parent")
                .disabled()
                .with_children([MenuItem::new("child", "Child")]),
        ];
        let config = RailConfig::default();
        let state = RailState::new(&config);

        let rows = render_rows(&items, &state, &config);
        assert!(rows.iter().all(|row| row.click_target().is_none()));
    }

    #[test]
    fn target_that_became_disabled_is_rejected_as_stale() {
        let mut items = home_settings();
        let config = RailConfig::default();
        let mut state = RailState::new(&config);
        let rows = render_rows(&items, &state, &config);
        let target = row(&rows, "b").click_target().expect("enabled row");

        items[1].disabled = true;
        let err = reduce_rail(&mut state, &config, &items, RailAction::ClickItem(target))
            .expect_err("disabled since render");

        assert_eq!(
            err,
            RailError::StaleTarget {
                key: "1".to_string(),
                id: "b".to_string(),
            }
        );
        assert!(state.expanded_ids.is_empty());
    }

    #[test]
    fn target_pointing_at_replaced_entry_is_rejected() {
        let items = home_settings();
        let config = RailConfig::default();
        let mut state = RailState::new(&config);
        let rows = render_rows(&items, &state, &config);
        let target = row(&rows, "a").click_target().expect("enabled row");

        let replaced = vec![MenuItem::new("z", "Other")];
        assert!(matches!(
            reduce_rail(&mut state, &config, &replaced, RailAction::ClickItem(target)),
            Err(RailError::StaleTarget { .. })
        ));
    }

    #[test]
    fn toggle_collapse_reports_each_new_value() {
        let config = RailConfig::default();
        let mut state = RailState::new(&config);

        let first = reduce_rail(&mut state, &config, &[], RailAction::ToggleCollapse)
            .expect("collapse");
        assert_eq!(first, vec![RailEffect::CollapseChanged(true)]);
        assert!(state.collapsed);

        let second = reduce_rail(&mut state, &config, &[], RailAction::ToggleCollapse)
            .expect("expand");
        assert_eq!(second, vec![RailEffect::CollapseChanged(false)]);
        assert_eq!(state, RailState::new(&config));
    }

    #[test]
    fn non_collapsible_rail_rejects_collapse_actions() {
        let config = RailConfig {
            collapsible: false,
            ..RailConfig::default()
        };
        let mut state = RailState::new(&config);

        assert_eq!(
            reduce_rail(&mut state, &config, &[], RailAction::ToggleCollapse),
            Err(RailError::CollapseDisabled)
        );
        assert_eq!(
            reduce_rail(
                &mut state,
                &config,
                &[],
                RailAction::SetCollapsed { collapsed: true }
            ),
            Err(RailError::CollapseDisabled)
        );
        assert!(!state.collapsed);
    }

    #[test]
    fn set_collapsed_only_reports_changes() {
        let config = RailConfig::default();
        let mut state = RailState::new(&config);

        let unchanged = reduce_rail(
            &mut state,
            &config,
            &[],
            RailAction::SetCollapsed { collapsed: false },
        )
        .expect("no-op");
        assert!(unchanged.is_empty());

        let changed = reduce_rail(
            &mut state,
            &config,
            &[],
            RailAction::SetCollapsed { collapsed: true },
        )
        .expect("collapse");
        assert_eq!(changed, vec![RailEffect::CollapseChanged(true)]);
    }

    #[test]
    fn collapsed_rail_still_dispatches_clicks() {
        let items = home_settings();
        let config = RailConfig::default();
        let mut state = RailState::new(&config);
        reduce_rail(&mut state, &config, &items, RailAction::ToggleCollapse).expect("collapse");

        let effects = click(&mut state, &config, &items, "b").expect("click while collapsed");
        assert_eq!(clicked_count(&effects), 1);
        assert!(state.is_expanded("b"));
    }

    fn linked_parent() -> Vec<MenuItem> {
        vec![MenuItem::new("docs", "Docs")
            .with_href("/docs")
            .with_children([MenuItem::new("guide", "Guide").with_href("/docs/guide")])]
    }

    #[test]
    fn linked_parent_follows_click_policy() {
        let items = linked_parent();
        let cases = [
            (
                ParentClickPolicy::NavigateAndToggle,
                true,
                vec![
                    RailEffect::ItemClicked(items[0].clone()),
                    RailEffect::Navigate("/docs".to_string()),
                ],
            ),
            (
                ParentClickPolicy::ToggleOnly,
                true,
                vec![RailEffect::ItemClicked(items[0].clone())],
            ),
            (
                ParentClickPolicy::NavigateOnly,
                false,
                vec![
                    RailEffect::ItemClicked(items[0].clone()),
                    RailEffect::Navigate("/docs".to_string()),
                ],
            ),
        ];

        for (policy, expect_expanded, expect_effects) in cases {
            let config = RailConfig {
                parent_click: policy,
                ..RailConfig::default()
            };
            let mut state = RailState::new(&config);
            let effects = click(&mut state, &config, &items, "docs").expect("click docs");
            assert_eq!(effects, expect_effects, "{policy:?}");
            assert_eq!(state.is_expanded("docs"), expect_expanded, "{policy:?}");
        }
    }

    #[test]
    fn linked_leaf_always_navigates() {
        let items = linked_parent();
        let config = RailConfig {
            parent_click: ParentClickPolicy::ToggleOnly,
            ..RailConfig::default()
        };
        let mut state = RailState::new(&config);
        click(&mut state, &config, &items, "docs").expect("expand docs");

        let effects = click(&mut state, &config, &items, "guide").expect("click guide");
        assert_eq!(
            effects.last(),
            Some(&RailEffect::Navigate("/docs/guide".to_string()))
        );
        assert_eq!(state.expanded_ids.len(), 1);
    }

    fn nested() -> Vec<MenuItem> {
        vec![
            MenuItem::new("a", "A").with_children([
                MenuItem::new("a1", "A1").with_children([MenuItem::new("a1x", "A1x").active()]),
                MenuItem::new("a2", "A2"),
            ]),
            MenuItem::new("b", "B").with_children([MenuItem::new("b1", "B1")]),
            MenuItem::new("c", "C").with_children(Vec::new()),
        ]
    }

    #[test]
    fn expand_all_and_collapse_all() {
        let items = nested();
        let config = RailConfig::default();
        let mut state = RailState::new(&config);

        let effects =
            reduce_rail(&mut state, &config, &items, RailAction::ExpandAll).expect("expand all");
        assert!(effects.is_empty());
        assert_eq!(
            state.expanded_ids.iter().map(String::as_str).collect::<Vec<_>>(),
            vec!["a", "a1", "b"]
        );
        assert_eq!(render_rows(&items, &state, &config).len(), 7);

        reduce_rail(&mut state, &config, &items, RailAction::CollapseAll).expect("collapse all");
        assert!(state.expanded_ids.is_empty());
    }

    #[test]
    fn reveal_active_expands_only_ancestors() {
        let items = nested();
        let config = RailConfig::default();
        let mut state = RailState::new(&config);

        reduce_rail(&mut state, &config, &items, RailAction::RevealActive).expect("reveal");

        assert_eq!(
            state.expanded_ids.iter().map(String::as_str).collect::<Vec<_>>(),
            vec!["a", "a1"]
        );
        let rows = render_rows(&items, &state, &config);
        assert!(rows.iter().any(|row| row.id == "a1x" && row.active));
    }

    #[test]
    fn replaced_tree_drops_expansion_of_removed_entries() {
        let config = RailConfig::default();
        let mut state = RailState::new(&config);
        reduce_rail(&mut state, &config, &nested(), RailAction::ExpandAll).expect("expand all");

        let replaced = vec![
            MenuItem::new("b", "B").with_children([MenuItem::new("b1", "B1")]),
            MenuItem::new("a", "A"),
        ];
        let effects = reduce_rail(&mut state, &config, &replaced, RailAction::PruneExpanded)
            .expect("prune");

        assert!(effects.is_empty());
        assert_eq!(
            state.expanded_ids.iter().map(String::as_str).collect::<Vec<_>>(),
            vec!["b"]
        );

        let restored = nested();
        let rows = render_rows(&restored, &state, &config);
        assert!(!row(&rows, "a").expanded);
    }

    #[test]
    fn expand_all_and_reveal_active_forget_stale_ids() {
        let items = nested();
        let config = RailConfig::default();
        let mut state = RailState::new(&config);
        state.expanded_ids.insert("gone".to_string());

        reduce_rail(&mut state, &config, &items, RailAction::RevealActive).expect("reveal");
        assert!(!state.is_expanded("gone"));

        state.expanded_ids.insert("gone".to_string());
        reduce_rail(&mut state, &config, &items, RailAction::ExpandAll).expect("expand all");
        assert_eq!(
            state.expanded_ids.iter().map(String::as_str).collect::<Vec<_>>(),
            vec!["a", "a1", "b"]
        );
    }
}
