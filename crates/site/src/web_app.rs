use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use rail_showcase::RailShowcaseApp;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Sidebar Rail" />
        <Meta name="description" content="Collapsible navigation rail showcase." />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="/*any" view=ShowcaseRoute />
                </Routes>
            </main>
        </Router>
    }
}

/// Every path renders the showcase; the rail marks the entry whose `href` matches the path.
#[component]
pub fn ShowcaseRoute() -> impl IntoView {
    let location = use_location();
    let pathname = Signal::derive(move || location.pathname.get());
    let navigate = use_navigate();
    let on_navigate = Callback::new(move |href: String| {
        navigate(&href, NavigateOptions::default());
    });

    view! { <RailShowcaseApp pathname on_navigate /> }
}
