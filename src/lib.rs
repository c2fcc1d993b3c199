//! # pingerus-ui
//!
//! Leptos + WASM frontend for the Pingerus URL-uptime monitoring service.
//!
//! This crate contains pages, components, application state, and the
//! authenticated REST client. All check scheduling, probing, and persistence
//! happens in the external API server; the client's only stateful concern is
//! the auth session, persisted to localStorage.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: mounts the app over the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(crate::app::App);
}
