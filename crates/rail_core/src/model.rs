//! Menu tree records and the rail-local interaction state.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::config::RailConfig;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// One navigable or expandable node of the rail's menu tree.
pub struct MenuItem {
    /// Key among siblings. Also the key tracked in [`RailState::expanded_ids`].
    pub id: String,
    /// Display text.
    pub label: String,
    /// Glyph reference; rows without one render a placeholder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Navigation target. `None` marks an expand-only node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Short annotation shown after the label.
    #[serde(
        default,
        deserialize_with = "deserialize_badge",
        skip_serializing_if = "Option::is_none"
    )]
    pub badge: Option<String>,
    /// Ordered child entries.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MenuItem>,
    /// Caller-supplied highlight flag.
    #[serde(default)]
    pub active: bool,
    /// Caller-supplied flag; disabled rows render but never dispatch clicks.
    #[serde(default)]
    pub disabled: bool,
}

impl MenuItem {
    /// Creates a leaf entry with no icon, target, or badge.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            ..Self::default()
        }
    }

    /// Sets the glyph reference.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Sets the navigation target.
    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    /// Sets the badge annotation.
    pub fn with_badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = Some(badge.into());
        self
    }

    /// Replaces the child entries.
    pub fn with_children(mut self, children: impl IntoIterator<Item = MenuItem>) -> Self {
        self.children = children.into_iter().collect();
        self
    }

    /// Marks the entry active.
    pub fn active(mut self) -> Self {
        self.active = true;
        self
    }

    /// Marks the entry disabled.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Returns `true` when the entry has at least one child.
    ///
    /// An empty `children` list is not expandable and renders without an expand affordance.
    pub fn is_expandable(&self) -> bool {
        !self.children.is_empty()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum BadgeRepr {
    Text(String),
    Number(serde_json::Number),
}

fn deserialize_badge<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(
        Option::<BadgeRepr>::deserialize(deserializer)?.map(|repr| match repr {
            BadgeRepr::Text(text) => text,
            BadgeRepr::Number(number) => number.to_string(),
        }),
    )
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
/// Index path from the root item list down to one node.
///
/// Ids only need to be unique among siblings, so the path is what identifies a rendered row.
pub struct ItemPath(Vec<usize>);

impl ItemPath {
    /// Path of a top-level item.
    pub fn root(index: usize) -> Self {
        Self(vec![index])
    }

    /// Path of the `index`-th child below this node.
    pub fn child(&self, index: usize) -> Self {
        let mut indices = self.0.clone();
        indices.push(index);
        Self(indices)
    }

    /// Raw indices, outermost first.
    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    /// Nesting depth of the addressed node; top-level items are depth `0`.
    pub fn depth(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    /// Dotted key (`"0.2.1"`) used for DOM ids and list reconciliation.
    pub fn key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ItemPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, index) in self.0.iter().enumerate() {
            if position > 0 {
                f.write_str(".")?;
            }
            write!(f, "{index}")?;
        }
        Ok(())
    }
}

/// Resolves `path` against `items`, returning `None` when any index is out of range.
pub fn find_item<'a>(items: &'a [MenuItem], path: &ItemPath) -> Option<&'a MenuItem> {
    let (first, rest) = path.indices().split_first()?;
    let mut current = items.get(*first)?;
    for index in rest {
        current = current.children.get(*index)?;
    }
    Some(current)
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Rail-local interaction state. Created on mount, dropped on unmount, never serialized.
pub struct RailState {
    /// Icon-only mode: labels and badges are hidden.
    pub collapsed: bool,
    /// Ids of expandable entries whose children are currently shown.
    pub expanded_ids: BTreeSet<String>,
}

impl RailState {
    /// Fresh state for a newly mounted rail.
    pub fn new(config: &RailConfig) -> Self {
        Self {
            collapsed: config.collapsible && config.default_collapsed,
            expanded_ids: BTreeSet::new(),
        }
    }

    /// Returns `true` when `id` is in the expanded set.
    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded_ids.contains(id)
    }
}
