//! # stockmarket-client
//!
//! Leptos + WASM single-page client for the stock-watch backend.
//!
//! The crate is organized the same way as any route-driven Leptos front end:
//! `state` owns the session, `util::guard` decides guarded navigation,
//! `routes` is the declarative route table, `net` wraps the JSON API, and
//! `pages`/`components` render on top of those.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// Browser entry point: installs logging and mounts [`app::App`] on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn mount() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
