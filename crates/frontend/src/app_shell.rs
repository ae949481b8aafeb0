//! Application Shell: корневые компоненты приложения
//!
//! - `AppShell`: API key gate (shows `ApiKeyRequiredPage` or `MainLayout`)
//! - `MainLayout`: header + active feature surface + footer

use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::system::api_key::use_api_key;
use crate::system::pages::api_key_required::ApiKeyRequiredPage;
use leptos::prelude::*;

/// Mounts the layout and its `?tab=` sync. Remounts when the gate reopens;
/// the initial query value is only applied on the first mount.
#[component]
fn MainLayout() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    ctx.init_router_integration();

    view! { <Shell /> }
}

/// Application shell - API key gate.
///
/// While the host query is pending the layout is shown optimistically; it is
/// replaced by the blocking page only when the host reports no key.
#[component]
pub fn AppShell() -> impl IntoView {
    let gate = use_api_key();

    view! {
        <Show
            when=move || gate.state.with(|s| s.is_open())
            fallback=|| view! { <ApiKeyRequiredPage /> }
        >
            <MainLayout />
        </Show>
    }
}
