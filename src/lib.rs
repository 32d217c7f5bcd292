/// PR Peek - Chrome Extension popup for your open GitHub pull requests
/// Built with Rust + WASM + Yew

pub mod controller;
pub mod github;
pub mod pr_data;
pub mod query;
pub mod storage;
#[cfg(target_arch = "wasm32")]
pub mod ui;

use wasm_bindgen::prelude::*;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Start the Yew app for the popup
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn start_popup() {
    yew::Renderer::<ui::popup::App>::new().render();
}
