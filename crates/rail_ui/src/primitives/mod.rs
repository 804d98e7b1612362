//! Rail-facing building blocks: the row button, the showcase panel chrome, and the `data-ui-*`
//! tokens they publish.

use leptos::ev::MouseEvent;
use leptos::*;

mod controls;
mod data_display;
mod layout;

pub use controls::Button;
pub use data_display::{Badge, Heading, Panel, Text};
pub use layout::{SplitLayout, Stack};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Button emphasis.
pub enum ButtonVariant {
    /// Bordered button.
    #[default]
    Standard,
    /// Borderless button used for rail rows and the collapse toggle.
    Quiet,
}

impl ButtonVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Quiet => "quiet",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Button density.
pub enum ButtonSize {
    /// Icon-sized control.
    Sm,
    /// Row-sized control.
    #[default]
    Md,
}

impl ButtonSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Heading level.
pub enum TextRole {
    /// Section label.
    Label,
    /// Surface title.
    #[default]
    Title,
}

impl TextRole {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Label => "label",
            Self::Title => "title",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Text emphasis.
pub enum TextTone {
    /// Regular text.
    #[default]
    Primary,
    /// De-emphasized text.
    Secondary,
}

impl TextTone {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Spacing between children of a layout primitive.
pub enum LayoutGap {
    /// Regular spacing.
    #[default]
    Md,
    /// Wide spacing.
    Lg,
}

impl LayoutGap {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Inner padding of a container.
pub enum LayoutPadding {
    /// Flush content.
    #[default]
    None,
    /// Regular padding.
    Md,
    /// Wide padding.
    Lg,
}

impl LayoutPadding {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
