//! PageFrame: root wrapper for every feature surface.
//!
//! Sets `id="{surface}--page"` and `data-surface` on the root element so the
//! mounted surface can be located in the DOM.

use leptos::prelude::*;

#[component]
pub fn PageFrame(
    /// Surface key, e.g. `"logo_animator"`
    surface: &'static str,
    #[prop(into)]
    title: String,
    #[prop(into)]
    subtitle: String,
    children: Children,
) -> impl IntoView {
    view! {
        <section
            id=format!("{surface}--page")
            class="page"
            data-surface=surface
        >
            <div class="page__header">
                <h1 class="page__title">{title}</h1>
                <p class="page__subtitle">{subtitle}</p>
            </div>
            <div class="page__content">
                {children()}
            </div>
        </section>
    }
}
