pub mod app;
pub mod app_shell;
pub mod layout;
pub mod shared;
pub mod system;
pub mod usecases;

use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    let (config, config_note) = shared::config::load_config();

    // initializes logging using the `log` crate
    _ = console_log::init_with_level(config.logging.level());
    console_error_panic_hook::set_once();

    if let Some(note) = config_note {
        log::info!("{}", note);
    }

    leptos::mount::mount_to_body(move || view! { <app::App config=config /> });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
