//! Web UI for portfolio-site
//!
//! A Yew-based single-page site for the 9teen visuals photography studio:
//! public galleries, a booking form, and an admin view for managing the
//! portfolio.

mod admin;
mod app;
mod booking;
mod gallery;
mod home;
mod nav;
mod state;

use wasm_bindgen::prelude::*;

/// Entry point for the WASM application.
#[wasm_bindgen(start)]
pub fn run_app() {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();

    // Mount the Yew app
    yew::Renderer::<app::App>::new().render();
}
