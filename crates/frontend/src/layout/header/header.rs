use contracts::domain::AppTab;
use leptos::prelude::*;

use crate::shared::components::ui::Button;
use crate::shared::config::use_config;
use crate::shared::icons::icon;

fn tab_icon(tab: AppTab) -> AnyView {
    match tab {
        AppTab::Logo => icon("logo"),
        AppTab::Generate => icon("film"),
        AppTab::Enhance => icon("image"),
    }
}

/// Brand bar with one button per tab. Only ever emits valid `AppTab` values.
#[component]
pub fn Header(
    #[prop(into)]
    active_tab: Signal<AppTab>,
    on_tab_change: Callback<AppTab>,
) -> impl IntoView {
    let title = use_config().app.title;

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <span class="header__title">{title}</span>
            </div>
            <nav class="header__tabs" aria-label="Studio tools">
                {AppTab::all()
                    .into_iter()
                    .map(|tab| view! {
                        <Button
                            variant="tab"
                            active=Signal::derive(move || active_tab.get() == tab)
                            title=tab.label()
                            on_click=Callback::new(move |_: leptos::ev::MouseEvent| on_tab_change.run(tab))
                        >
                            {tab_icon(tab)}
                            <span class="header__tab-label">{tab.label()}</span>
                        </Button>
                    })
                    .collect_view()}
            </nav>
        </header>
    }
}
