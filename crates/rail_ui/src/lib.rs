//! Leptos view layer for the sidebar rail.
//!
//! The crate owns the rail primitives, a small glyph-reference icon API, and the stable
//! `data-ui-*` DOM contract consumed by the rail stylesheet. State transitions live in
//! [`rail_core`]; components here only render [`rail_core::RailView`] values and dispatch
//! [`rail_core::RailAction`] values back through the reducer.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;
mod rail;

pub use icon::{disclosure_glyph, Icon, IconSize, COLLAPSE_GLYPH, EXPAND_GLYPH};
pub use primitives::{
    Badge, Button, ButtonSize, ButtonVariant, Heading, LayoutGap, LayoutPadding, Panel,
    SplitLayout, Stack, Text, TextRole, TextTone,
};
pub use rail::{RailCollapseToggle, RailRow, SidebarRail};

/// Convenience imports for application crates hosting a rail.
pub mod prelude {
    pub use crate::{
        Badge, Button, ButtonSize, ButtonVariant, Heading, Icon, IconSize, LayoutGap,
        LayoutPadding, Panel, RailCollapseToggle, RailRow, SidebarRail, SplitLayout, Stack, Text,
        TextRole, TextTone,
    };
    pub use rail_core::{MenuItem, ParentClickPolicy, RailConfig, RailManifest};
}
