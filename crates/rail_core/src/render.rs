//! Pure rendering of a menu tree into the ordered rows a view layer draws.

use crate::config::RailConfig;
use crate::model::{ItemPath, MenuItem, RailState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Horizontal placement of a row's content.
pub enum RowInset {
    /// Inline-start padding in pixels (`depth * indent_unit + base_offset`).
    Indented(u16),
    /// Icon centered within a fixed width (collapsed rail).
    Centered(u16),
}

impl RowInset {
    /// Pixel value carried by either variant.
    pub fn px(self) -> u16 {
        match self {
            Self::Indented(px) | Self::Centered(px) => px,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Icon slot of a row.
pub enum RowIcon {
    /// Caller-supplied glyph reference.
    Glyph(String),
    /// Neutral placeholder so rows without an icon keep a uniform height.
    Placeholder,
}

impl RowIcon {
    /// Glyph name, with `placeholder` for [`RowIcon::Placeholder`].
    pub fn name(&self) -> &str {
        match self {
            Self::Glyph(name) => name,
            Self::Placeholder => "placeholder",
        }
    }
}

impl From<&str> for RowIcon {
    fn from(name: &str) -> Self {
        if name.is_empty() {
            Self::Placeholder
        } else {
            Self::Glyph(name.to_string())
        }
    }
}

impl From<Option<&String>> for RowIcon {
    fn from(icon: Option<&String>) -> Self {
        match icon {
            Some(name) if !name.is_empty() => Self::Glyph(name.clone()),
            _ => Self::Placeholder,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Proof that a row was rendered enabled. Required by `RailAction::ClickItem`.
///
/// Only [`RenderedRow::click_target`] constructs it, and it refuses to for disabled rows, so a
/// disabled item can never reach the reducer.
pub struct ClickTarget {
    path: ItemPath,
    id: String,
}

impl ClickTarget {
    /// Location of the clicked entry in the tree it was rendered from.
    pub fn path(&self) -> &ItemPath {
        &self.path
    }

    /// Id of the clicked entry.
    pub fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// One visible row of the rail.
pub struct RenderedRow {
    /// Dotted path key, unique across the whole rail.
    pub key: String,
    /// Location of the source entry.
    pub path: ItemPath,
    /// Source entry id.
    pub id: String,
    /// Nesting depth; top-level rows are `0`.
    pub depth: usize,
    /// Content placement.
    pub inset: RowInset,
    /// Label text; always `None` on a collapsed rail.
    pub label: Option<String>,
    /// Badge text; always `None` on a collapsed rail.
    pub badge: Option<String>,
    /// Icon slot.
    pub icon: RowIcon,
    /// Whether the row shows an expand affordance.
    pub expandable: bool,
    /// Whether the row's children are rendered below it.
    pub expanded: bool,
    /// Caller-supplied highlight flag.
    pub active: bool,
    /// Caller-supplied disabled flag.
    pub disabled: bool,
    /// Navigation target, if any.
    pub href: Option<String>,
}

impl RenderedRow {
    /// Click handle for an enabled row; `None` when the row is disabled.
    pub fn click_target(&self) -> Option<ClickTarget> {
        if self.disabled {
            return None;
        }
        Some(ClickTarget {
            path: self.path.clone(),
            id: self.id.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Whole-rail render result.
pub struct RailView {
    /// Visible rows, depth-first pre-order.
    pub rows: Vec<RenderedRow>,
    /// Icon-only mode.
    pub collapsed: bool,
    /// Effective rail width for the current mode.
    pub width_px: u16,
}

impl RailView {
    /// Visible row rendered under the path `key`, if any.
    pub fn row(&self, key: &str) -> Option<&RenderedRow> {
        self.rows.iter().find(|row| row.key == key)
    }
}

/// Renders the rail: rows plus the width for the current collapsed mode.
pub fn render_rail(items: &[MenuItem], state: &RailState, config: &RailConfig) -> RailView {
    RailView {
        rows: render_rows(items, state, config),
        collapsed: state.collapsed,
        width_px: if state.collapsed {
            config.collapsed_width_px
        } else {
            config.width_px
        },
    }
}

/// Renders every top-level entry in array order.
pub fn render_rows(items: &[MenuItem], state: &RailState, config: &RailConfig) -> Vec<RenderedRow> {
    items
        .iter()
        .enumerate()
        .flat_map(|(index, item)| render_node(item, 0, ItemPath::root(index), state, config))
        .collect()
}

/// Renders `item` at `depth` followed, when expanded, by its children at `depth + 1`.
///
/// Ordering and indentation come from the recursion itself: each child is rendered by this same
/// function immediately after its parent, in `children` order.
pub fn render_node(
    item: &MenuItem,
    depth: usize,
    path: ItemPath,
    state: &RailState,
    config: &RailConfig,
) -> Vec<RenderedRow> {
    let expandable = item.is_expandable();
    let expanded = expandable && state.is_expanded(&item.id);

    let mut rows = vec![RenderedRow {
        key: path.key(),
        id: item.id.clone(),
        depth,
        inset: row_inset(depth, state.collapsed, config),
        label: (!state.collapsed).then(|| item.label.clone()),
        badge: item.badge.clone().filter(|_| !state.collapsed),
        icon: RowIcon::from(item.icon.as_ref()),
        expandable,
        expanded,
        active: item.active,
        disabled: item.disabled,
        href: item.href.clone(),
        path: path.clone(),
    }];

    if expanded {
        for (index, child) in item.children.iter().enumerate() {
            rows.extend(render_node(child, depth + 1, path.child(index), state, config));
        }
    }
    rows
}

fn row_inset(depth: usize, collapsed: bool, config: &RailConfig) -> RowInset {
    if collapsed {
        return RowInset::Centered(config.collapsed_width_px);
    }
    let depth = u16::try_from(depth).unwrap_or(u16::MAX);
    RowInset::Indented(
        depth
            .saturating_mul(config.indent_unit_px)
            .saturating_add(config.base_offset_px),
    )
}
