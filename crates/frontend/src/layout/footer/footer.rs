use chrono::{Datelike, Utc};
use leptos::prelude::*;

use crate::shared::config::use_config;

#[component]
pub fn Footer() -> impl IntoView {
    let app = use_config().app;
    let year = Utc::now().year();
    let initial = app.title.chars().next().unwrap_or('J').to_string();

    view! {
        <footer data-zone="footer" class="footer">
            <div class="footer__content">
                <div class="footer__brand">
                    <div class="footer__mark">{initial}</div>
                    <span class="footer__name">{app.title.clone()}</span>
                </div>
                <div class="footer__taglines">
                    {app.taglines
                        .into_iter()
                        .map(|t| view! { <span>{t}</span> })
                        .collect_view()}
                </div>
                <div class="footer__copyright">
                    {format!("© {} {}. All rights reserved.", year, app.company)}
                </div>
            </div>
        </footer>
    }
}
