//! Role-gated wrapper for admin and worker pages.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::net::types::Role;
use crate::state::auth::use_auth;
use crate::util::auth::{GuardDecision, is_login_path, is_within_area};

/// Render `children` only for a session holding `required_role`.
///
/// Visitors without a session go to the role's login screen with the current
/// path as the intended destination; sessions for another role go home.
#[component]
pub fn ProtectedRoute(required_role: Role, children: ChildrenFn) -> impl IntoView {
    let state = use_auth().state();
    let decision = Memo::new(move |_| state.with(|s| GuardDecision::from_state(s, required_role)));
    let pathname = use_location().pathname;
    let navigate = use_navigate();

    Effect::new(move || {
        let decision = decision.get();
        let path = pathname.get_untracked();
        // Already navigated away (e.g. logout heading home or to login).
        if !is_within_area(required_role, &path) || is_login_path(&path) {
            return;
        }
        if let Some(target) = decision.redirect(required_role, &path) {
            log::debug!("guard {decision:?} on {path}; redirecting to {target}");
            navigate(&target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    view! {
        <Show
            when=move || decision.get() == GuardDecision::Authorized
            fallback=move || {
                view! {
                    <div class="route-guard">
                        <p>
                            {move || {
                                if decision.get() == GuardDecision::Bootstrapping {
                                    "Loading..."
                                } else {
                                    "Redirecting..."
                                }
                            }}
                        </p>
                    </div>
                }
            }
        >
            {children()}
        </Show>
    }
}
