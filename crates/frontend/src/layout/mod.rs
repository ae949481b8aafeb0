pub mod center;
pub mod footer;
pub mod global_context;
pub mod header;

use leptos::prelude::*;

use center::TabRouter;
use footer::Footer;
use global_context::AppGlobalContext;
use header::Header;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |  Header (brand + tab buttons)            |
/// +------------------------------------------+
/// |  TabRouter (active feature surface)      |
/// +------------------------------------------+
/// |  Footer                                  |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div class="app-layout">
            <Header
                active_tab=ctx.active_tab
                on_tab_change=Callback::new(move |tab| ctx.set_tab(tab))
            />
            <TabRouter active_tab=ctx.active_tab />
            <Footer />
        </div>
    }
}
