use super::*;

#[component]
/// Native `<button>` carrying the tree-item ARIA state rail rows need.
///
/// State-bearing attributes accept signals so the control stays mounted while its state changes.
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] role: Option<String>,
    #[prop(optional, into)] aria_label: MaybeSignal<Option<String>>,
    #[prop(optional, into)] title: MaybeSignal<Option<String>>,
    #[prop(optional, into)] aria_level: MaybeSignal<Option<String>>,
    #[prop(optional, into)] aria_expanded: MaybeSignal<Option<bool>>,
    #[prop(optional, into)] aria_current: MaybeSignal<Option<&'static str>>,
    #[prop(optional, into)] style: MaybeSignal<Option<String>>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=merge_layout_class("ui-button", layout_class)
            role=role
            aria-label=move || aria_label.get()
            title=move || title.get()
            aria-level=move || aria_level.get()
            aria-expanded=move || aria_expanded.get().map(bool_token)
            aria-current=move || aria_current.get()
            style=move || style.get()
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-slot=ui_slot
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            data-ui-selected=move || bool_token(selected.get())
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click {
                    on_click.call(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
