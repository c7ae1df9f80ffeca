//! # client
//!
//! Leptos front end for RustyMine: a public login page and a session-gated
//! dashboard, rendered on the server and hydrated in the browser.
//!
//! Session semantics (login exchange, session check, guard decisions) live in
//! the `session` crate; this crate wires them into routes, signals, and views.

pub mod app;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point called by the generated WASM bootstrap.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
