use std::sync::atomic::{AtomicBool, Ordering};

use leptos::*;
use wasm_bindgen::prelude::*;

pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod models;
pub mod router;
pub mod store;

static STARTED: AtomicBool = AtomicBool::new(false);

/// Claim the one start allowed per page; false if the app already started
pub fn claim_start() -> bool {
    !STARTED.swap(true, Ordering::SeqCst)
}

/// WASM entry point - called when the WASM module loads
#[wasm_bindgen(start)]
pub fn main() {
    if !claim_start() {
        log::warn!("Air-Con Controller already mounted, ignoring second start");
        return;
    }

    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    let config = config::AppConfig::load();

    // Verbose diagnostics only in debug builds
    _ = console_log::init_with_level(config.log_level());

    log::info!("Starting Air-Con Controller");

    // Mount the app to the document body
    mount_to_body(move || view! { <app::App config=config.clone() /> });
}
