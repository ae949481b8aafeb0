use contracts::domain::{AppTab, FeatureSurface};
use leptos::prelude::*;

use crate::usecases::{ImageEnhancer, LogoAnimator, VideoGenerator};

fn render_surface(surface: FeatureSurface) -> AnyView {
    match surface {
        FeatureSurface::LogoAnimator => view! { <LogoAnimator /> }.into_any(),
        FeatureSurface::VideoGenerator => view! { <VideoGenerator /> }.into_any(),
        FeatureSurface::ImageEnhancer => view! { <ImageEnhancer /> }.into_any(),
    }
}

/// Mounts the surface of the active tab. Every tab change renders a fresh
/// surface; the previous one is unmounted with all of its state.
#[component]
pub fn TabRouter(#[prop(into)] active_tab: Signal<AppTab>) -> impl IntoView {
    // Memo so that re-selecting the current tab does not remount it
    let surface = Memo::new(move |_| active_tab.get().surface());

    view! {
        <main data-zone="center" class="app-main">
            <div class="app-main__surface" data-tab=move || active_tab.get().as_str()>
                {move || render_surface(surface.get())}
            </div>
        </main>
    }
}
