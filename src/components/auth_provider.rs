//! Root provider for the session and the backend client.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once inside the router. It owns the `AuthController`, the
//! `ApiClient`, and the 401 event channel between them, and restores the
//! persisted session after the first client render.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::config;
use crate::net::http::{ApiClient, HttpEvent};
use crate::state::auth::AuthController;
use crate::util::auth::install_unauthorized_logout;

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let auth = AuthController::new();
    let events = RwSignal::new(None::<HttpEvent>);
    provide_context(auth);
    provide_context(ApiClient::new(config::api_base_url(), auth, events));

    // Effects only run in the browser, so the server render and the first
    // hydrated render both see the bootstrapping state.
    Effect::new(move || auth.hydrate());

    install_unauthorized_logout(auth, events, use_location().pathname, use_navigate());

    children()
}
