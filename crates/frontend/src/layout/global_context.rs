use contracts::domain::AppTab;
use contracts::error::ValidationError;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Query-string key mirroring the active tab
pub const TAB_QUERY_KEY: &str = "tab";

/// Root-owned UI state shared with the layout through context.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active_tab: RwSignal<AppTab>,
    /// Set once the initial `?tab=` value has been applied.
    query_applied: StoredValue<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active_tab: RwSignal::new(AppTab::default()),
            query_applied: StoredValue::new(false),
        }
    }

    pub fn set_tab(&self, tab: AppTab) {
        log::debug!("active tab: {}", tab);
        self.active_tab.set(tab);
    }

    /// Keeps `?tab=` in sync with the active tab for the lifetime of the
    /// calling layout. The initial query value is applied on the first call
    /// only; later calls (the layout remounts when the gate closes and
    /// reopens) just re-create the sync effect.
    pub fn init_router_integration(&self) {
        if self.take_initial_query() {
            let search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            match tab_from_query(&search) {
                Some(Ok(tab)) => self.active_tab.set(tab),
                Some(Err(e)) => log::warn!("ignoring ?{}=: {}", TAB_QUERY_KEY, e),
                None => {}
            }
        }

        let this = *self;
        Effect::new(move |_| {
            let new_url = query_for_tab(this.active_tab.get());

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    /// `true` exactly once per context.
    fn take_initial_query(&self) -> bool {
        let first = !self.query_applied.get_value();
        self.query_applied.set_value(true);
        first
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

/// `None` when the query has no tab parameter.
pub fn tab_from_query(search: &str) -> Option<Result<AppTab, ValidationError>> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params.get(TAB_QUERY_KEY).map(|value| AppTab::from_str(value))
}

/// `?tab=<value>`
pub fn query_for_tab(tab: AppTab) -> String {
    let query = serde_qs::to_string(&HashMap::from([(TAB_QUERY_KEY, tab.as_str())]))
        .unwrap_or_default();
    format!("?{}", query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_from_query() {
        assert_eq!(tab_from_query(""), None);
        assert_eq!(tab_from_query("?other=1"), None);
        assert_eq!(tab_from_query("?tab=enhance"), Some(Ok(AppTab::Enhance)));
        assert_eq!(tab_from_query("tab=generate&x=2"), Some(Ok(AppTab::Generate)));
        assert_eq!(
            tab_from_query("?tab=settings"),
            Some(Err(ValidationError::UnknownTab("settings".to_string())))
        );
    }

    #[test]
    fn test_initial_query_applied_once() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = AppGlobalContext::new();
            assert!(ctx.take_initial_query());
            assert!(!ctx.take_initial_query());
            assert!(AppGlobalContext::new().take_initial_query());
        });
    }

    #[test]
    fn test_query_for_tab_round_trips() {
        for tab in AppTab::all() {
            let query = query_for_tab(tab);
            assert_eq!(query, format!("?tab={}", tab.as_str()));
            assert_eq!(tab_from_query(&query), Some(Ok(tab)));
        }
    }
}
