use leptos::prelude::*;

/// Button component with variants (primary, secondary, ghost, tab)
#[component]
pub fn Button(
    /// Button variant: "primary" (default), "secondary", "ghost" or "tab"
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Highlighted state, used by "tab" buttons
    #[prop(optional, into)]
    active: MaybeProp<bool>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Tooltip
    #[prop(optional, into)]
    title: MaybeProp<String>,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Click event handler
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("primary") {
        "secondary" => "button--secondary",
        "ghost" => "button--ghost",
        "tab" => "button--tab",
        _ => "button--primary",
    };
    let active_class = move || {
        if active.get().unwrap_or(false) {
            "button--active"
        } else {
            ""
        }
    };
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <button
            type="button"
            class=move || format!("button {} {} {}", variant_class(), active_class(), additional_class())
            title=move || title.get().unwrap_or_default()
            aria-pressed=move || active.get().map(|a| a.to_string())
            disabled=move || disabled.get().unwrap_or(false)
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
