//! DiasporaNest Web Frontend
//!
//! Leptos-based WASM client: landing page, gated property dashboard,
//! payment callback and legal pages.

mod api;
mod app;
mod components;
mod pages;
mod storage;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
