use super::*;

#[component]
/// Column of children separated by `gap`.
pub fn Stack(
    #[prop(optional)] gap: LayoutGap,
    #[prop(optional)] padding: LayoutPadding,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class="ui-stack"
            data-ui-primitive="true"
            data-ui-kind="stack"
            data-ui-gap=gap.token()
            data-ui-padding=padding.token()
        >
            {children()}
        </div>
    }
}

#[component]
/// Side-by-side panes; the first child (usually the rail) keeps its own width.
pub fn SplitLayout(
    #[prop(optional)] gap: LayoutGap,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-split-layout", layout_class)
            data-ui-primitive="true"
            data-ui-kind="split-layout"
            data-ui-gap=gap.token()
        >
            {children()}
        </div>
    }
}
