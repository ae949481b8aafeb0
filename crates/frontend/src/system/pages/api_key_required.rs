use leptos::prelude::*;

use crate::shared::components::ui::Button;
use crate::shared::config::use_config;
use crate::shared::icons::icon;
use crate::system::api_key::use_api_key;

/// Blocking screen shown while no API key is selected.
#[component]
pub fn ApiKeyRequiredPage() -> impl IntoView {
    let gate = use_api_key();
    let billing_url = use_config().app.billing_docs_url;

    let error_message = move || gate.state.with(|s| s.error.clone());
    let selecting = move || gate.state.with(|s| s.selecting);

    view! {
        <div class="key-gate">
            <div class="key-gate__card">
                <div class="key-gate__icon">{icon("key")}</div>
                <div class="key-gate__text">
                    <h2 class="key-gate__title">"API Key Required"</h2>
                    <p class="key-gate__description">
                        "To use Veo video generation models, you must select a paid API key from a Google Cloud project with billing enabled."
                    </p>
                    <a
                        class="key-gate__link"
                        href=billing_url
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        "Billing Documentation"
                    </a>
                </div>

                <Show when=move || error_message().is_some()>
                    <div class="error-message">
                        {move || error_message().unwrap_or_default()}
                    </div>
                </Show>

                <Button
                    class="key-gate__action"
                    disabled=Signal::derive(selecting)
                    on_click=Callback::new(move |_: leptos::ev::MouseEvent| gate.open_selector())
                >
                    {move || if selecting() { "Waiting for selection..." } else { "Select API Key" }}
                </Button>
            </div>
        </div>
    }
}
