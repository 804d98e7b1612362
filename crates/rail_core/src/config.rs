//! Rail configuration and the JSON manifest format hosts can ship alongside their menu tree.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::MenuItem;

/// Expanded rail width used when the config omits one.
pub const DEFAULT_RAIL_WIDTH_PX: u16 = 256;
/// Icon-only rail width used when the config omits one.
pub const DEFAULT_COLLAPSED_WIDTH_PX: u16 = 48;
/// Per-level indentation used when the config omits one.
pub const DEFAULT_INDENT_UNIT_PX: u16 = 16;
/// Top-level indentation used when the config omits one.
pub const DEFAULT_BASE_OFFSET_PX: u16 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// How a click on an expandable entry that also carries an `href` is interpreted.
///
/// Leaves always navigate and expand-only parents always toggle; the policy only decides the
/// ambiguous case.
pub enum ParentClickPolicy {
    /// Toggle expansion and navigate.
    #[default]
    NavigateAndToggle,
    /// Toggle expansion only; the `href` is ignored for parents.
    ToggleOnly,
    /// Navigate only; the entry stays as it is.
    NavigateOnly,
}

impl ParentClickPolicy {
    pub(crate) fn toggles_linked_parent(self) -> bool {
        matches!(self, Self::NavigateAndToggle | Self::ToggleOnly)
    }

    pub(crate) fn navigates_linked_parent(self) -> bool {
        matches!(self, Self::NavigateAndToggle | Self::NavigateOnly)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// Rail behavior and cosmetic metrics.
pub struct RailConfig {
    /// Collapsed state a freshly mounted rail starts in.
    pub default_collapsed: bool,
    /// Whether the rail may switch to icon-only mode at all.
    pub collapsible: bool,
    /// Expanded rail width.
    pub width_px: u16,
    /// Icon-only rail width; collapsed rows are centered within it.
    pub collapsed_width_px: u16,
    /// Inline indentation added per nesting level.
    pub indent_unit_px: u16,
    /// Inline indentation of top-level rows.
    pub base_offset_px: u16,
    /// Interpretation of clicks on parents that also link somewhere.
    pub parent_click: ParentClickPolicy,
}

impl Default for RailConfig {
    fn default() -> Self {
        Self {
            default_collapsed: false,
            collapsible: true,
            width_px: DEFAULT_RAIL_WIDTH_PX,
            collapsed_width_px: DEFAULT_COLLAPSED_WIDTH_PX,
            indent_unit_px: DEFAULT_INDENT_UNIT_PX,
            base_offset_px: DEFAULT_BASE_OFFSET_PX,
            parent_click: ParentClickPolicy::default(),
        }
    }
}

#[derive(Debug, Error)]
/// Errors raised while loading a [`RailManifest`].
pub enum ConfigError {
    /// The document is not valid manifest JSON.
    #[error("rail manifest parse failed: {0}")]
    Json(#[from] serde_json::Error),
    /// Two siblings share an id, which would make expansion and reconciliation ambiguous.
    #[error("duplicate menu item id `{id}` under {parent}")]
    DuplicateSiblingId {
        /// Id of the parent entry, or `<root>` for the top-level list.
        parent: String,
        /// The repeated id.
        id: String,
    },
    /// Collapsed rail would be wider than the expanded one.
    #[error("collapsed width {collapsed_width_px}px exceeds rail width {width_px}px")]
    CollapsedWiderThanRail {
        /// Configured expanded width.
        width_px: u16,
        /// Configured collapsed width.
        collapsed_width_px: u16,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Serialized rail definition: configuration plus the menu tree. Never carries rail state.
pub struct RailManifest {
    /// Rail configuration; omitted fields take their defaults.
    #[serde(default)]
    pub config: RailConfig,
    /// Top-level menu entries.
    #[serde(default)]
    pub items: Vec<MenuItem>,
}

impl RailManifest {
    /// Parses and validates a manifest document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for malformed JSON, sibling id collisions, or inconsistent widths.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let manifest: Self = serde_json::from_str(raw)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Checks width consistency and sibling id uniqueness at every level.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found, in depth-first order.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.config.collapsed_width_px > self.config.width_px {
            return Err(ConfigError::CollapsedWiderThanRail {
                width_px: self.config.width_px,
                collapsed_width_px: self.config.collapsed_width_px,
            });
        }
        validate_siblings(&self.items, "<root>")
    }
}

fn validate_siblings(items: &[MenuItem], parent: &str) -> Result<(), ConfigError> {
    let mut seen = BTreeSet::new();
    for item in items {
        if !seen.insert(item.id.as_str()) {
            return Err(ConfigError::DuplicateSiblingId {
                parent: parent.to_string(),
                id: item.id.clone(),
            });
        }
        validate_siblings(&item.children, &item.id)?;
    }
    Ok(())
}
