use leptos::prelude::*;

/// Textarea with label and a character counter
#[component]
pub fn Textarea(
    #[prop(optional, into)]
    label: MaybeProp<String>,
    #[prop(into)]
    value: Signal<String>,
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Rows attribute (default 4)
    #[prop(optional)]
    rows: Option<u32>,
    /// Shows "n / max" under the field and sets `maxlength`
    #[prop(optional)]
    max_chars: Option<usize>,
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let textarea_id = move || id.get().unwrap_or_default();
    let textarea_placeholder = move || placeholder.get().unwrap_or_default();
    let counter = move || {
        max_chars.map(|max| format!("{} / {}", value.with(|v| v.chars().count()), max))
    };

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=textarea_id>
                    {l}
                </label>
            })}
            <textarea
                id=textarea_id
                class="form__textarea"
                placeholder=textarea_placeholder
                disabled=move || disabled.get().unwrap_or(false)
                rows=rows.unwrap_or(4)
                maxlength=max_chars.map(|m| m.to_string())
                prop:value=move || value.get()
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
            {move || counter().map(|c| view! { <span class="form__hint">{c}</span> })}
        </div>
    }
}
