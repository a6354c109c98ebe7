//! # client
//!
//! Leptos + WASM frontend for the claimdesk workshop administration app.
//!
//! This crate contains pages, components, the client-side session state
//! (store, bootstrap, and role guard), and the REST helpers that talk to
//! the server's JSON API.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
