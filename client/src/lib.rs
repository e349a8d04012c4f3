//! # client
//!
//! Leptos + WASM frontend for the Anscer Robotics marketing and demo site.
//!
//! This crate contains pages, components, the browser session store, the
//! route guard, and the mock content fetchers. The `anscer-site` binary
//! renders it server-side; the `hydrate` feature builds the browser bundle.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
