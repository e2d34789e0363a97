//! demo-checkout Web Frontend
//!
//! Leptos-based WASM frontend for the checkout page.

mod app;
mod pages;
mod components;
mod timer;

pub use app::App;
pub use timer::TimeoutDelay;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
