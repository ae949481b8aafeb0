use leptos::prelude::*;

/// Segmented radio group: one button-like option per value
#[component]
pub fn RadioGroup(
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Current selected value
    #[prop(into)]
    value: Signal<String>,
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Name attribute (for grouping)
    #[prop(into)]
    name: String,
    /// Options: (value, label)
    options: Vec<(String, String)>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
) -> impl IntoView {
    let is_disabled = move || disabled.get().unwrap_or(false);

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <span class="form__label">{l}</span>
            })}
            <div class="form__segmented" role="radiogroup">
                {options
                    .into_iter()
                    .map(|(val, lbl)| {
                        let radio_id = format!("{}-{}", name, val.replace(':', "x"));
                        let input_id = radio_id.clone();
                        let val_for_class = val.clone();
                        let val_for_check = val.clone();
                        let val_for_change = val.clone();
                        let segment_class = move || {
                            if value.get() == val_for_class {
                                "form__segment form__segment--active"
                            } else {
                                "form__segment"
                            }
                        };
                        let is_checked = move || value.get() == val_for_check;
                        view! {
                            <label
                                class=segment_class
                                for=radio_id
                            >
                                <input
                                    id=input_id
                                    type="radio"
                                    class="form__radio"
                                    name=name.clone()
                                    value=val
                                    checked=is_checked
                                    disabled=is_disabled
                                    on:change=move |_| {
                                        if let Some(handler) = on_change {
                                            handler.run(val_for_change.clone());
                                        }
                                    }
                                />
                                {lbl}
                            </label>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
