use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use crate::shared::icons::icon;
use crate::shared::media_file::{format_size, MediaFile};

/// Image upload with preview. Replacing or clearing the file drops the previous
/// `MediaFile`, which revokes its preview URL.
#[component]
pub fn ImagePicker(
    file: RwSignal<Option<MediaFile>, LocalStorage>,
    #[prop(into)]
    label: String,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Called with an error message when the browser refuses the file
    #[prop(optional)]
    on_error: Option<Callback<String>>,
) -> impl IntoView {
    let on_change = move |ev: leptos::ev::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(selected) = input.files().and_then(|list| list.get(0)) else {
            return;
        };
        match MediaFile::from_file(selected) {
            Ok(media) => {
                log::info!(
                    "selected {} ({})",
                    media.file.name(),
                    format_size(media.file.size() as u64)
                );
                file.set(Some(media));
            }
            Err(e) => {
                log::error!("{}", e);
                if let Some(handler) = on_error {
                    handler.run(e);
                }
            }
        }
        // Allow picking the same file again
        input.set_value("");
    };

    let preview = move || {
        file.with(|f| {
            f.as_ref().map(|m| {
                (
                    m.preview_url.clone(),
                    m.file.name(),
                    format_size(m.file.size() as u64),
                )
            })
        })
    };

    view! {
        <div class="picker">
            <Show
                when=move || preview().is_some()
                fallback=move || view! {
                    <label class="picker__drop">
                        {icon("upload")}
                        <span class="picker__label">{label.clone()}</span>
                        <span class="picker__hint">"PNG, JPEG or WebP"</span>
                        <input
                            type="file"
                            class="picker__input"
                            accept="image/png,image/jpeg,image/webp"
                            disabled=move || disabled.get().unwrap_or(false)
                            on:change=on_change
                        />
                    </label>
                }
            >
                {move || preview().map(|(url, name, size)| {
                    let alt = name.clone();
                    view! {
                    <div class="picker__preview">
                        <img class="picker__image" src=url alt=alt />
                        <div class="picker__meta">
                            <span class="picker__name">{name}</span>
                            <span class="picker__size">{size}</span>
                            <button
                                type="button"
                                class="button button--ghost"
                                title="Remove"
                                disabled=move || disabled.get().unwrap_or(false)
                                on:click=move |_| file.set(None)
                            >
                                {icon("x")}
                            </button>
                        </div>
                    </div>
                    }
                })}
            </Show>
        </div>
    }
}
