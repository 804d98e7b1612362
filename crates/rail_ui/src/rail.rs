//! Sidebar rail components.
//!
//! [`SidebarRail`] owns the rail-local [`RailState`] and funnels every interaction through
//! [`reduce_rail`]. Rows are drawn from [`render_rail`], so ordering, indentation, and the
//! collapsed-mode label suppression all come from `rail_core`. Rows are reconciled by their path
//! key and read their changing fields from signals, so toggling an entry updates its row in place.

use leptos::ev::MouseEvent;
use leptos::*;
use rail_core::{
    reduce_rail, render_rail, ClickTarget, MenuItem, RailAction, RailConfig, RailEffect, RailState,
    RailView, RenderedRow, RowIcon, RowInset,
};

use crate::icon::{disclosure_glyph, Icon, IconSize, COLLAPSE_GLYPH, EXPAND_GLYPH};
use crate::primitives::{bool_token, merge_layout_class, Badge, Button, ButtonSize, ButtonVariant};

#[derive(Clone, Copy)]
struct RailCallbacks {
    on_item_click: Option<Callback<MenuItem>>,
    on_collapse_change: Option<Callback<bool>>,
    on_navigate: Option<Callback<String>>,
}

impl RailCallbacks {
    fn run(self, effect: RailEffect) {
        match effect {
            RailEffect::ItemClicked(item) => {
                if let Some(on_item_click) = self.on_item_click {
                    on_item_click.call(item);
                }
            }
            RailEffect::CollapseChanged(collapsed) => {
                if let Some(on_collapse_change) = self.on_collapse_change {
                    on_collapse_change.call(collapsed);
                }
            }
            RailEffect::Navigate(href) => {
                if let Some(on_navigate) = self.on_navigate {
                    on_navigate.call(href);
                }
            }
        }
    }
}

#[derive(Clone, Copy)]
struct RailDispatcher {
    state: RwSignal<RailState>,
    items: Signal<Vec<MenuItem>>,
    config: StoredValue<RailConfig>,
    callbacks: RailCallbacks,
}

impl RailDispatcher {
    /// Reduces `action` against the current tree, stores the new state, then runs the emitted
    /// callbacks in order.
    fn dispatch(self, action: RailAction) {
        let mut next = self.state.get_untracked();
        let result = self.items.with_untracked(|items| {
            self.config
                .with_value(|config| reduce_rail(&mut next, config, items, action))
        });

        match result {
            Ok(effects) => {
                if next != self.state.get_untracked() {
                    self.state.set(next);
                }
                for effect in effects {
                    self.callbacks.run(effect);
                }
            }
            Err(err) => logging::warn!("sidebar rail reducer error: {err}"),
        }
    }

    /// Keeps expansion consistent with `items` on mount and whenever the tree is replaced.
    fn follow_items(self, reveal_active: bool) {
        create_effect(move |_| {
            self.items.with(|_| ());
            self.dispatch(RailAction::PruneExpanded);
            if reveal_active {
                self.dispatch(RailAction::RevealActive);
            }
        });
    }

    fn rendered(self) -> Memo<RailView> {
        create_memo(move |_| {
            self.items.with(|items| {
                self.state.with(|state| {
                    self.config
                        .with_value(|config| render_rail(items, state, config))
                })
            })
        })
    }
}

/// Live view of the row rendered under `initial.key`.
///
/// Keeps the last known row once the key disappears, until the owning `For` child is disposed.
fn track_row(rail: Memo<RailView>, initial: RenderedRow) -> Signal<RenderedRow> {
    let key = initial.key.clone();
    create_memo(move |previous: Option<&RenderedRow>| {
        rail.with(|view| view.row(&key).cloned())
            .or_else(|| previous.cloned())
            .unwrap_or_else(|| initial.clone())
    })
    .into()
}

fn rail_state_token(collapsed: bool) -> &'static str {
    if collapsed {
        "collapsed"
    } else {
        "expanded"
    }
}

fn rail_width_style(width_px: u16) -> String {
    format!("inline-size: {width_px}px;")
}

fn inset_token(inset: RowInset) -> &'static str {
    match inset {
        RowInset::Indented(_) => "indented",
        RowInset::Centered(_) => "centered",
    }
}

fn inset_style(inset: RowInset) -> String {
    match inset {
        RowInset::Indented(px) => format!("padding-inline-start: {px}px;"),
        RowInset::Centered(px) => {
            format!("inline-size: {px}px; padding-inline: 0; justify-content: center;")
        }
    }
}

fn collapse_toggle_label(collapsed: bool) -> &'static str {
    if collapsed {
        "Expand sidebar"
    } else {
        "Collapse sidebar"
    }
}

#[component]
/// Vertical navigation rail over a caller-owned menu tree.
///
/// Callbacks run synchronously, in the order the reducer emits them, after the rail state has
/// been updated.
pub fn SidebarRail(
    /// Menu tree to render. Owned by the caller; the rail never mutates it.
    #[prop(into)]
    items: Signal<Vec<MenuItem>>,
    /// Behavior and metrics. Read once at mount.
    #[prop(optional)]
    config: RailConfig,
    /// Extra class appended to `ui-sidebar-rail`.
    #[prop(optional)]
    layout_class: Option<&'static str>,
    /// Accessible name of the `<nav>` landmark.
    #[prop(optional, into)]
    aria_label: Option<String>,
    /// Expand the ancestors of `active` entries on mount and whenever `items` changes.
    #[prop(optional)]
    reveal_active: bool,
    /// Invoked with the clicked entry, including expand-only parents.
    #[prop(optional)]
    on_item_click: Option<Callback<MenuItem>>,
    /// Invoked with the new collapsed value after every collapse change.
    #[prop(optional)]
    on_collapse_change: Option<Callback<bool>>,
    /// Invoked with the entry's `href` when a click resolves to navigation.
    #[prop(optional)]
    on_navigate: Option<Callback<String>>,
) -> impl IntoView {
    let collapsible = config.collapsible;
    let rail = RailDispatcher {
        state: create_rw_signal(RailState::new(&config)),
        items,
        config: store_value(config),
        callbacks: RailCallbacks {
            on_item_click,
            on_collapse_change,
            on_navigate,
        },
    };
    rail.follow_items(reveal_active);

    let rendered = rail.rendered();
    let collapsed = Signal::derive(move || rendered.with(|view| view.collapsed));
    let activate = Callback::new(move |target: ClickTarget| {
        rail.dispatch(RailAction::ClickItem(target));
    });

    view! {
        <nav
            class=merge_layout_class("ui-sidebar-rail", layout_class)
            aria-label=aria_label
            style=move || rail_width_style(rendered.with(|view| view.width_px))
            data-ui-primitive="true"
            data-ui-kind="sidebar-rail"
            data-ui-state=move || rail_state_token(collapsed.get())
            data-ui-collapsible=bool_token(collapsible)
        >
            {collapsible.then(|| view! {
                <div data-ui-slot="header">
                    <RailCollapseToggle
                        collapsed
                        on_toggle=Callback::new(move |_| rail.dispatch(RailAction::ToggleCollapse))
                    />
                </div>
            })}
            <ul class="ui-sidebar-rail-rows" role="tree" data-ui-slot="rows">
                <For
                    each=move || rendered.with(|view| view.rows.clone())
                    key=|row| row.key.clone()
                    let:row
                >
                    <RailRow row=track_row(rendered, row) on_activate=activate />
                </For>
            </ul>
        </nav>
    }
}

#[component]
/// Button that switches the rail between labelled and icon-only modes.
pub fn RailCollapseToggle(
    /// Current collapsed value.
    #[prop(into)]
    collapsed: Signal<bool>,
    /// Invoked on click; the rail dispatches a collapse toggle from here.
    #[prop(optional)]
    on_toggle: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    let label = Signal::derive(move || Some(collapse_toggle_label(collapsed.get()).to_string()));
    view! {
        <Button
            layout_class="ui-sidebar-rail-toggle"
            ui_slot="collapse-toggle"
            variant=ButtonVariant::Quiet
            size=ButtonSize::Sm
            aria_label=label
            title=label
            aria_expanded=Signal::derive(move || Some(!collapsed.get()))
            on_click=Callback::new(move |ev| {
                if let Some(on_toggle) = on_toggle {
                    on_toggle.call(ev);
                }
            })
        >
            {move || {
                let glyph = if collapsed.get() { EXPAND_GLYPH } else { COLLAPSE_GLYPH };
                view! { <Icon icon=RowIcon::from(glyph) size=IconSize::Sm /> }
            }}
        </Button>
    }
}

#[component]
/// One rail row: the leaf control that enforces the disabled state.
///
/// Disabled rows render with a disabled button and have no [`ClickTarget`], so they can never
/// dispatch a click.
pub fn RailRow(
    /// Row produced by [`render_rail`]. Its `key` must stay fixed for the life of the row.
    #[prop(into)]
    row: Signal<RenderedRow>,
    /// Receives the row's click target when an enabled row is activated.
    #[prop(optional)]
    on_activate: Option<Callback<ClickTarget>>,
) -> impl IntoView {
    let key = row.with_untracked(|row| row.key.clone());
    let indicator = move || {
        row.with(|row| row.expandable.then_some(row.expanded))
            .map(|expanded| {
                view! {
                    <span data-ui-slot="indicator">
                        <Icon icon=RowIcon::from(disclosure_glyph(expanded)) size=IconSize::Sm />
                    </span>
                }
            })
    };

    view! {
        <li
            class="ui-rail-row"
            role="none"
            data-ui-primitive="true"
            data-ui-kind="rail-row"
            data-ui-key=key
            data-ui-depth=move || row.with(|row| row.depth.to_string())
            data-ui-inset=move || row.with(|row| inset_token(row.inset))
            data-ui-expandable=move || row.with(|row| bool_token(row.expandable))
            data-ui-expanded=move || row.with(|row| bool_token(row.expanded))
            data-ui-active=move || row.with(|row| bool_token(row.active))
        >
            <Button
                layout_class="ui-rail-row-control"
                ui_slot="rail-row"
                variant=ButtonVariant::Quiet
                role="treeitem".to_string()
                aria_level=Signal::derive(move || Some(row.with(|row| (row.depth + 1).to_string())))
                aria_expanded=Signal::derive(move || {
                    row.with(|row| row.expandable.then_some(row.expanded))
                })
                aria_current=Signal::derive(move || row.with(|row| row.active.then_some("page")))
                style=Signal::derive(move || Some(row.with(|row| inset_style(row.inset))))
                disabled=Signal::derive(move || row.with(|row| row.disabled))
                selected=Signal::derive(move || row.with(|row| row.active))
                on_click=Callback::new(move |_| {
                    let target = row.with_untracked(|row| row.click_target());
                    if let (Some(target), Some(on_activate)) = (target, on_activate) {
                        on_activate.call(target);
                    }
                })
            >
                {move || view! { <Icon icon=row.with(|row| row.icon.clone()) size=IconSize::Sm /> }}
                {move || {
                    row.with(|row| row.label.clone())
                        .map(|label| view! { <span data-ui-slot="label">{label}</span> })
                }}
                {move || row.with(|row| row.badge.clone()).map(|badge| view! { <Badge>{badge}</Badge> })}
                {indicator}
            </Button>
        </li>
    }
}
