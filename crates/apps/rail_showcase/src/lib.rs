//! Sidebar rail showcase.
//!
//! Renders a sample navigation tree shipped as `nav.json` through [`rail_ui::SidebarRail`] and
//! logs every callback the rail fires, so collapse behavior, click policy, and disabled rows can
//! be reviewed in a real surface.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use leptos::*;
use rail_core::{MenuItem, RailManifest};
use rail_ui::prelude::*;
use serde::Serialize;

const NAV_MANIFEST: &str = include_str!("../nav.json");
const EVENT_LOG_LIMIT: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
/// One rail callback as observed by the host.
pub enum ShowcaseEvent {
    /// `on_item_click` fired.
    ItemClicked {
        /// Clicked entry id.
        id: String,
        /// Clicked entry label.
        label: String,
    },
    /// `on_collapse_change` fired.
    CollapseChanged {
        /// New collapsed value.
        collapsed: bool,
    },
    /// `on_navigate` fired.
    Navigated {
        /// Navigation target.
        href: String,
    },
}

impl ShowcaseEvent {
    /// One-line description for the event log.
    pub fn describe(&self) -> String {
        match self {
            Self::ItemClicked { id, label } => format!("clicked {label} ({id})"),
            Self::CollapseChanged { collapsed: true } => "rail collapsed".to_string(),
            Self::CollapseChanged { collapsed: false } => "rail expanded".to_string(),
            Self::Navigated { href } => format!("navigate to {href}"),
        }
    }
}

/// Prepends `event` to `log`, keeping only the most recent entries.
pub fn push_event(log: &mut Vec<ShowcaseEvent>, event: ShowcaseEvent) {
    log.insert(0, event);
    log.truncate(EVENT_LOG_LIMIT);
}

/// Copies `items`, marking exactly the entries whose `href` equals `pathname` as active.
pub fn mark_active(items: &[MenuItem], pathname: &str) -> Vec<MenuItem> {
    items
        .iter()
        .map(|item| MenuItem {
            active: item.href.as_deref() == Some(pathname),
            children: mark_active(&item.children, pathname),
            ..item.clone()
        })
        .collect()
}

/// Parses the bundled manifest, falling back to an empty rail if it does not validate.
pub fn load_manifest(raw: &str) -> RailManifest {
    match RailManifest::from_json(raw) {
        Ok(manifest) => manifest,
        Err(err) => {
            logging::warn!("rail showcase manifest load failed: {err}");
            RailManifest::default()
        }
    }
}

#[component]
/// Showcase surface: the rail beside a live callback log.
pub fn RailShowcaseApp(
    /// Current location path, used to derive the active entry.
    #[prop(into)]
    pathname: Signal<String>,
    /// Host navigation hook. Without it navigation requests are only logged.
    #[prop(optional)]
    on_navigate: Option<Callback<String>>,
) -> impl IntoView {
    let RailManifest { config, items } = load_manifest(NAV_MANIFEST);
    let items = store_value(items);
    let rail_items = Signal::derive(move || {
        pathname.with(|pathname| items.with_value(|items| mark_active(items, pathname)))
    });
    let events = create_rw_signal(Vec::<ShowcaseEvent>::new());

    let record = move |event: ShowcaseEvent| events.update(|log| push_event(log, event));
    let latest_payload = move || {
        events.with(|log| {
            log.first()
                .map(|event| match serde_json::to_string_pretty(event) {
                    Ok(json) => json,
                    Err(err) => {
                        logging::warn!("rail showcase payload serialize failed: {err}");
                        String::new()
                    }
                })
                .unwrap_or_default()
        })
    };

    view! {
        <SplitLayout layout_class="rail-showcase" gap=LayoutGap::Lg>
            <SidebarRail
                items=rail_items
                config
                reveal_active=true
                aria_label="Showcase navigation".to_string()
                on_item_click=Callback::new(move |item: MenuItem| {
                    record(ShowcaseEvent::ItemClicked {
                        id: item.id,
                        label: item.label,
                    });
                })
                on_collapse_change=Callback::new(move |collapsed: bool| {
                    record(ShowcaseEvent::CollapseChanged { collapsed });
                })
                on_navigate=Callback::new(move |href: String| {
                    record(ShowcaseEvent::Navigated { href: href.clone() });
                    if let Some(on_navigate) = on_navigate {
                        on_navigate.call(href);
                    }
                })
            />
            <Panel layout_class="rail-showcase-events" padding=LayoutPadding::Lg>
                <Stack gap=LayoutGap::Md>
                    <Heading role=TextRole::Title>"Sidebar rail"</Heading>
                    <Text tone=TextTone::Secondary>
                        {move || format!("Location: {}", pathname.get())}
                    </Text>
                    <Heading role=TextRole::Label>"Callbacks"</Heading>
                    <ol class="rail-showcase-log">
                        {move || {
                            events
                                .get()
                                .into_iter()
                                .map(|event| view! { <li>{event.describe()}</li> })
                                .collect_view()
                        }}
                    </ol>
                    <Heading role=TextRole::Label>"Latest payload"</Heading>
                    <pre class="rail-showcase-payload">{latest_payload}</pre>
                </Stack>
            </Panel>
        </SplitLayout>
    }
}
