use contracts::domain::ProcessingState;
use leptos::prelude::*;

/// Status line with an optional progress bar. Hidden while idle.
#[component]
pub fn ProcessingStatus(#[prop(into)] state: Signal<ProcessingState>) -> impl IntoView {
    let visible = move || state.with(|s| s.is_processing || !s.message.is_empty());

    view! {
        <Show when=visible>
            <div
                class=move || if state.with(|s| s.is_processing) { "processing processing--active" } else { "processing" }
                role="status"
            >
                <div class="processing__line">
                    <span class="processing__message">{move || state.with(|s| s.message.clone())}</span>
                    <span class="processing__percent">{move || state.with(ProcessingState::percent_label)}</span>
                </div>
                {move || state.with(|s| s.progress).map(|p| view! {
                    <div class="processing__bar">
                        <div class="processing__fill" style=format!("width: {:.0}%", p)></div>
                    </div>
                })}
            </div>
        </Show>
    }
}
