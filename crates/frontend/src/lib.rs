pub mod app;
pub mod config;
pub mod domain;
pub mod shared;

use app::App;
use config::PageConfig;
use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    let loaded = PageConfig::from_location();
    let config = loaded.clone().unwrap_or_default();

    // initializes logging using the `log` crate
    _ = console_log::init_with_level(config.log_level());
    console_error_panic_hook::set_once();

    if let Err(e) = loaded {
        log::warn!("{}; using default configuration", e);
    }
    log::debug!("Page configuration: {:?}", config);

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
