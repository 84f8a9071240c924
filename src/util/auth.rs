//! Route authorization policy and the global unauthorized handler.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ProtectedRoute` maps auth state to a [`GuardDecision`] on every render and
//! the login screens map the intended-destination marker back to a path. The
//! HTTP layer reports 401s on an event channel; [`install_unauthorized_logout`]
//! is the one place that turns such an event into a logout.
//!
//! DESIGN
//! ======
//! Every decision here is a pure function of its inputs so the guard and the
//! login-screen exemption can be tested without rendering.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::http::HttpEvent;
use crate::net::types::Role;
use crate::state::auth::{AuthController, AuthState};

/// Query parameter carrying the intended destination to a login screen.
pub const FROM_PARAM: &str = "from";

/// Public landing page.
pub const HOME_PATH: &str = "/";

/// Outcome of evaluating a guarded route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Hydration has not finished; show a loading indicator.
    Bootstrapping,
    /// No session; send the visitor to the role's login screen.
    Unauthenticated,
    /// Signed in under another role; send the visitor home.
    WrongRole,
    /// Render the guarded content.
    Authorized,
}

impl GuardDecision {
    pub fn decide(loading: bool, is_authenticated: bool, role: Option<Role>, required: Role) -> Self {
        if loading {
            Self::Bootstrapping
        } else if !is_authenticated {
            Self::Unauthenticated
        } else if role != Some(required) {
            Self::WrongRole
        } else {
            Self::Authorized
        }
    }

    pub fn from_state(state: &AuthState, required: Role) -> Self {
        Self::decide(state.loading(), state.is_authenticated(), state.role(), required)
    }

    /// Where to send the visitor, if anywhere. `attempted` is the path being
    /// guarded; it is only carried along to the login screen.
    pub fn redirect(self, required: Role, attempted: &str) -> Option<String> {
        match self {
            Self::Unauthenticated => Some(login_redirect(required, attempted)),
            Self::WrongRole => Some(HOME_PATH.to_owned()),
            Self::Bootstrapping | Self::Authorized => None,
        }
    }
}

/// Login screen URL for `role`, carrying `attempted` as the intended
/// destination.
pub fn login_redirect(role: Role, attempted: &str) -> String {
    let marker: String = url::form_urlencoded::byte_serialize(attempted.as_bytes()).collect();
    format!("{}?{FROM_PARAM}={marker}", role.login_path())
}

/// Where a successful login for `role` lands.
///
/// The intended destination is used only when it is a local path inside the
/// role's own area; anything else falls back to the role's dashboard.
pub fn post_login_destination(role: Role, intended: Option<&str>) -> String {
    match intended.map(str::trim) {
        Some(path) if is_safe_destination(role, path) => path.to_owned(),
        _ => role.dashboard_path(),
    }
}

/// Whether `path` belongs to the pages owned by `role`.
pub fn is_within_area(role: Role, path: &str) -> bool {
    path.starts_with(&role.area_prefix())
}

fn is_safe_destination(role: Role, path: &str) -> bool {
    is_within_area(role, path)
        && !path.contains("//")
        && !path.contains('\\')
        && !is_login_path(path)
}

/// Whether `path` is a login screen (`/admin/login`, `/worker/login`, ...).
pub fn is_login_path(path: &str) -> bool {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    path.trim_end_matches('/').ends_with("/login")
}

/// Response to a 401 observed while the app is showing `current_path`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnauthorizedAction {
    /// A login screen owns its own failed-attempt error.
    Suppress,
    /// The session is no longer valid; clear it and go home.
    ForceLogout,
}

pub fn unauthorized_action(current_path: &str) -> UnauthorizedAction {
    if is_login_path(current_path) {
        UnauthorizedAction::Suppress
    } else {
        UnauthorizedAction::ForceLogout
    }
}

/// Log out and return home whenever the HTTP layer reports a 401 away from a
/// login screen.
pub fn install_unauthorized_logout<F>(
    auth: AuthController,
    events: RwSignal<Option<HttpEvent>>,
    current_path: Memo<String>,
    navigate: F,
) where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let Some(event) = events.get() else {
            return;
        };
        events.set(None);
        match event {
            HttpEvent::Unauthorized => {
                handle_unauthorized(auth, &current_path.get_untracked(), &navigate);
            }
        }
    });
}

/// Apply the 401 policy for `path`: leave login screens alone, otherwise
/// clear the session and replace the current entry with the home page.
pub fn handle_unauthorized<F>(auth: AuthController, path: &str, navigate: &F) -> UnauthorizedAction
where
    F: Fn(&str, NavigateOptions),
{
    let action = unauthorized_action(path);
    match action {
        UnauthorizedAction::Suppress => {
            log::debug!("401 on login screen {path}; left to the screen");
        }
        UnauthorizedAction::ForceLogout => {
            log::info!("401 on {path}; session expired, logging out");
            auth.logout();
            navigate(HOME_PATH, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    }
    action
}
