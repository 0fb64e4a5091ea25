// lib.rs - Root module for the moro_admin library
//
// The state and API layers build without any features and are what the
// native tests exercise. The Leptos views are compiled for the server
// (`ssr`) and for the browser bundle (`hydrate`).

pub mod config;
pub mod web_app;

pub use config::AdminConfig;

/// WASM entry point: attach the client-side app to the server-rendered HTML
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(web_app::App);
}
