use super::*;

#[component]
/// Bordered container for secondary surfaces next to the rail.
pub fn Panel(
    #[prop(default = LayoutPadding::Md)] padding: LayoutPadding,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <section
            class=merge_layout_class("ui-panel", layout_class)
            data-ui-primitive="true"
            data-ui-kind="panel"
            data-ui-padding=padding.token()
        >
            {children()}
        </section>
    }
}

#[component]
/// Inline text run.
pub fn Text(#[prop(optional)] tone: TextTone, children: Children) -> impl IntoView {
    view! {
        <span class="ui-text" data-ui-primitive="true" data-ui-kind="text" data-ui-tone=tone.token()>
            {children()}
        </span>
    }
}

#[component]
/// Title or section label.
pub fn Heading(#[prop(optional)] role: TextRole, children: Children) -> impl IntoView {
    view! {
        <div
            class="ui-heading"
            data-ui-primitive="true"
            data-ui-kind="heading"
            data-ui-variant=role.token()
        >
            {children()}
        </div>
    }
}

#[component]
/// Short annotation shown after a row label, such as an unread count.
pub fn Badge(children: Children) -> impl IntoView {
    view! {
        <span class="ui-badge" data-ui-primitive="true" data-ui-kind="badge" data-ui-slot="badge">
            {children()}
        </span>
    }
}
