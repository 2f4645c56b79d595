//! # client
//!
//! Leptos + WASM host for the cursor trail.
//!
//! The `cursor-trail` crate owns the particle engine and its browser wiring;
//! this crate wraps it in a `<CursorTrail/>` component whose mount and
//! cleanup follow the component's lifetime, and provides a client-side
//! rendered entry point for the page shell.

pub mod app;
pub mod components;

/// Browser entry point: install logging and mount [`app::App`] on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::mount_to_body(app::App);
}
