//! AI Resume Checker Web App (Leptos + WASM)

mod actions;
mod analytics;
mod api;
mod app;
mod chart;
mod components;
mod storage;
mod types;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(app::App);
}
