use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::config::Config;
use crate::system::api_key::{detect_host, ApiKeyProvider};
use leptos::prelude::*;

#[component]
pub fn App(config: Config) -> impl IntoView {
    provide_context(config);

    // Active tab lives here so it survives the gate closing and reopening the layout
    provide_context(AppGlobalContext::new());

    view! {
        <ApiKeyProvider host=detect_host()>
            <AppShell />
        </ApiKeyProvider>
    }
}
