//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthController` is created once by `AuthProvider` and shared through
//! context. Route guards read its derived state, login screens call `login`
//! with the credentials the backend returned, and the global 401 handler calls
//! `logout`. The controller never talks to the network itself.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use super::session::SessionStore;
use crate::net::types::{Identity, LoginData, Role};
use crate::util::session_storage::BrowserStorage;

/// An authenticated session triple.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub token: String,
    pub identity: Identity,
    pub role: Role,
}

impl From<LoginData> for Session {
    fn from(data: LoginData) -> Self {
        Self { token: data.token, identity: data.identity, role: data.role }
    }
}

/// Authentication state tracking the session and bootstrap status.
///
/// Only [`SessionStore`] mutates the fields, which keeps the triple atomic.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub(super) session: Option<Session>,
    pub(super) loading: bool,
}

impl Default for AuthState {
    /// Empty and still bootstrapping, as at application start.
    fn default() -> Self {
        Self { session: None, loading: true }
    }
}

impl AuthState {
    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn role(&self) -> Option<Role> {
        self.session.as_ref().map(|s| s.role)
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.session.as_ref().map(|s| &s.identity)
    }

    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }
}

/// Shared handle over the reactive auth state.
#[derive(Clone, Copy)]
pub struct AuthController {
    state: RwSignal<AuthState>,
    store: SessionStore<BrowserStorage>,
}

impl Default for AuthController {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthController {
    pub fn new() -> Self {
        Self { state: RwSignal::new(AuthState::default()), store: SessionStore::new(BrowserStorage) }
    }

    /// Read-only view for guards and components.
    pub fn state(self) -> ReadSignal<AuthState> {
        self.state.read_only()
    }

    /// Restore the persisted session. Only the first call has any effect.
    pub fn hydrate(self) {
        if !self.state.with_untracked(AuthState::loading) {
            return;
        }
        self.state.update(|state| self.store.hydrate(state));
    }

    pub fn login(self, identity: Identity, role: Role, token: String) {
        self.state.update(|state| self.store.commit(state, Session { token, identity, role }));
    }

    /// Replace the signed-in identity, keeping the token and role. No-op
    /// without a session.
    pub fn update_identity(self, identity: Identity) {
        let current = self.state.with_untracked(|s| s.session().map(|s| (s.token.clone(), s.role)));
        if let Some((token, role)) = current {
            self.login(identity, role, token);
        }
    }

    pub fn logout(self) {
        self.state.update(|state| self.store.clear(state));
    }

    pub fn is_authenticated(self) -> bool {
        self.state.with(AuthState::is_authenticated)
    }

    pub fn loading(self) -> bool {
        self.state.with(AuthState::loading)
    }

    pub fn role(self) -> Option<Role> {
        self.state.with(AuthState::role)
    }

    pub fn identity(self) -> Option<Identity> {
        self.state.with(|s| s.identity().cloned())
    }

    /// Current bearer token without subscribing the caller.
    pub fn token_untracked(self) -> Option<String> {
        self.state.with_untracked(|s| s.token().map(str::to_owned))
    }
}

/// Fetch the `AuthController` provided by `AuthProvider`.
///
/// # Panics
///
/// Panics when called outside an `AuthProvider` subtree. That is a wiring
/// defect, not a runtime condition, so it fails at the point of use.
pub fn use_auth() -> AuthController {
    use_context::<AuthController>()
        .unwrap_or_else(|| panic!("use_auth called outside of <AuthProvider>: wrap the routes in AuthProvider"))
}
