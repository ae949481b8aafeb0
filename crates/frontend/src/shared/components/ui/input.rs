use leptos::prelude::*;

/// Numeric input with bounds
#[component]
pub fn NumberInput(
    #[prop(optional, into)]
    label: MaybeProp<String>,
    #[prop(into)]
    value: Signal<u32>,
    /// Receives the raw text; parsing and range checks belong to the caller
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    min: u32,
    max: u32,
    /// Unit shown after the field, e.g. "sec"
    #[prop(optional, into)]
    suffix: MaybeProp<String>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=input_id>
                    {l}
                </label>
            })}
            <div class="form__input-row">
                <input
                    id=input_id
                    class="form__input"
                    type="number"
                    min=min
                    max=max
                    step="1"
                    prop:value=move || value.get().to_string()
                    disabled=move || disabled.get().unwrap_or(false)
                    on:input=move |ev| {
                        if let Some(handler) = on_input {
                            handler.run(event_target_value(&ev));
                        }
                    }
                />
                {move || suffix.get().map(|s| view! { <span class="form__suffix">{s}</span> })}
            </div>
        </div>
    }
}
