//! Email + password login shared by the admin and worker portals.
//!
//! SYSTEM CONTEXT
//! ==============
//! The route guard sends visitors here with the page they wanted in the
//! `from` query parameter. A successful login commits the session and lands
//! on that page when it is safe, otherwise on the role's dashboard. Failures
//! stay on this screen as an inline message; the global 401 handler ignores
//! login screens.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::net::error::ApiError;
use crate::net::http::{ApiClient, use_api};
use crate::net::services::{admin, worker};
use crate::net::types::{LoginData, LoginRequest, Role};
use crate::state::auth::use_auth;
use crate::util::auth::{FROM_PARAM, HOME_PATH, post_login_destination};
use crate::util::forms::{LOGIN_FAILED, validate_login_input};

#[component]
pub fn LoginPage(role: Role) -> impl IntoView {
    let auth = use_auth();
    let api = use_api();
    let navigate = use_navigate();
    let query = use_query_map();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let credentials = match validate_login_input(&email.get_untracked(), &password.get_untracked()) {
            Ok(credentials) => credentials,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        error.set(None);
        busy.set(true);

        let intended = query.with_untracked(|q| q.get(FROM_PARAM));
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match login_as(role, api, credentials).await {
                Ok(data) => {
                    let destination = post_login_destination(data.role, intended.as_deref());
                    auth.login(data.identity, data.role, data.token);
                    busy.set(false);
                    navigate(&destination, NavigateOptions::default());
                }
                Err(e) => {
                    log::debug!("{} login failed: {e}", role.as_str());
                    error.set(Some(failure_message(&e)));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>{heading(role)}</h1>
                <p class="login-card__subtitle">"CMC IT Support Desk"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        autocomplete="username"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <Show when=move || error.get().is_some()>
                        <p class="login-message login-message--error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <a class="login-card__back" href=HOME_PATH>
                    "Back to home"
                </a>
            </div>
        </div>
    }
}

async fn login_as(role: Role, api: ApiClient, credentials: LoginRequest) -> Result<LoginData, ApiError> {
    match role {
        Role::Admin => admin::login(api, &credentials).await,
        Role::Worker => worker::login(api, &credentials).await,
    }
}

fn heading(role: Role) -> &'static str {
    match role {
        Role::Admin => "Admin Login",
        Role::Worker => "IT Worker Login",
    }
}

/// Inline text for a failed attempt.
fn failure_message(error: &ApiError) -> String {
    error.user_message(LOGIN_FAILED)
}
