pub mod app;
pub mod components;
pub mod config;
pub mod drag;
pub mod editor;
pub mod forms;
pub mod models;
pub mod seed;
pub mod state;
pub mod telemetry;
pub mod tree;

use crate::app::App;
use crate::config::EditorConfig;
use leptos::prelude::*;

// Needed for `#[wasm_bindgen(start)]` on the wasm entrypoint.
#[cfg(all(target_arch = "wasm32", not(test)))]
use wasm_bindgen::prelude::wasm_bindgen;


// Only register the WASM start function for normal builds (not for tests),
// otherwise wasm-bindgen-test will end up with multiple entry symbols.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() {
    console_error_panic_hook::set_once();

    let config = EditorConfig::new();
    telemetry::init(config.log_level);
    tracing::info!(?config, "starting menu editor");

    mount_to_body(move || view! { <App config=config.clone() /> });
}
