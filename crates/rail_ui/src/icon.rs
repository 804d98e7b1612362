//! Glyph-reference icons.
//!
//! Menu entries name their icon with a free-form string; the stylesheet maps `data-ui-icon`
//! values to artwork. Entries without an icon render the `placeholder` glyph so every row keeps
//! the same height.

use leptos::*;
use rail_core::RowIcon;

use crate::primitives::bool_token;

/// Glyph on the collapse toggle while the rail is expanded.
pub const COLLAPSE_GLYPH: &str = "sidebar-collapse";
/// Glyph on the collapse toggle while the rail is collapsed.
pub const EXPAND_GLYPH: &str = "sidebar-expand";

const DISCLOSURE_OPEN_GLYPH: &str = "chevron-down";
const DISCLOSURE_CLOSED_GLYPH: &str = "chevron-right";

/// Disclosure indicator glyph for an expandable row.
pub fn disclosure_glyph(expanded: bool) -> &'static str {
    if expanded {
        DISCLOSURE_OPEN_GLYPH
    } else {
        DISCLOSURE_CLOSED_GLYPH
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Icon sizing tokens.
pub enum IconSize {
    /// Row and inline icons.
    Sm,
    /// Default icon.
    #[default]
    Md,
}

impl IconSize {
    fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
        }
    }
}

#[component]
/// Decorative icon slot.
pub fn Icon(
    #[prop(into)] icon: RowIcon,
    #[prop(default = IconSize::Md)] size: IconSize,
) -> impl IntoView {
    let placeholder = icon == RowIcon::Placeholder;
    view! {
        <span
            class="ui-icon"
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="icon"
            data-ui-icon=icon.name().to_string()
            data-ui-size=size.token()
            data-ui-placeholder=bool_token(placeholder)
        ></span>
    }
}
