//! Flashcard Generator Web App (Leptos + WASM)

mod api;
mod app;
mod browser;
mod components;
mod store;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"flashcard-web: mounting".into());
    leptos::mount::mount_to_body(app::App);
}
