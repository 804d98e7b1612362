//! Headless sidebar rail: menu tree model, click/collapse reducer, and the recursive row renderer.
//!
//! The crate has no UI framework dependency. View layers own a [`RailState`], feed
//! [`RailAction`] values through [`reduce_rail`], execute the returned [`RailEffect`] values in
//! order, and draw whatever [`render_rail`] produces for the current state.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod model;
pub mod reducer;
pub mod render;

pub use config::{ConfigError, ParentClickPolicy, RailConfig, RailManifest};
pub use model::{find_item, ItemPath, MenuItem, RailState};
pub use reducer::{reduce_rail, RailAction, RailEffect, RailError};
pub use render::{
    render_node, render_rail, render_rows, ClickTarget, RailView, RenderedRow, RowIcon, RowInset,
};
