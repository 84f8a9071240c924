//! # helpdesk-client
//!
//! Leptos + WASM frontend for the CMC IT-support complaint desk.
//!
//! Staff file complaints without signing in; administrators and IT workers
//! sign in to separate portals. The crate holds the session store, the auth
//! controller and route guard built on it, the bearer-token HTTP client with
//! its 401 channel, the typed backend services, and the portal pages.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    let _ = console_log::init_with_level(level);
    leptos::mount::hydrate_body(app::App);
}
