//! Session store: the single writer of token, identity and role.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthController` owns the reactive `AuthState`; every mutation of the
//! session triple is delegated here so memory and durable storage change
//! together.
//!
//! INVARIANTS
//! ==========
//! - Token, identity and role are present together or absent together, both
//!   in memory (one `Option<Session>`) and in storage (written and removed as a
//!   set).
//! - `hydrate` always leaves `loading == false`, whatever it found.
//! - Hydration treats any missing, empty, or unparseable entry as "no session".

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use super::auth::{AuthState, Session};
use crate::net::types::{Identity, Role};
use crate::util::session_storage::{IDENTITY_KEY, ROLE_KEY, SessionStorage, TOKEN_KEY};

#[derive(Clone, Copy, Debug, Default)]
pub struct SessionStore<S> {
    storage: S,
}

impl<S: SessionStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Restore a persisted session into `state` and end bootstrapping.
    pub fn hydrate(&self, state: &mut AuthState) {
        state.session = self.read_persisted();
        state.loading = false;
        log::debug!(
            "session hydrated: {}",
            state.session.as_ref().map_or("anonymous", |s| s.role.as_str())
        );
    }

    /// Replace the session in memory and storage.
    pub fn commit(&self, state: &mut AuthState, session: Session) {
        match serde_json::to_string(&session.identity) {
            Ok(identity) => {
                self.storage.set(TOKEN_KEY, &session.token);
                self.storage.set(IDENTITY_KEY, &identity);
                self.storage.set(ROLE_KEY, session.role.as_str());
            }
            Err(e) => {
                // Persist nothing rather than a partial triple.
                log::warn!("session identity not persisted: {e}");
                self.erase();
            }
        }
        log::info!("session committed for {}", session.role.as_str());
        state.session = Some(session);
    }

    /// Drop the session from memory and storage. Idempotent.
    pub fn clear(&self, state: &mut AuthState) {
        self.erase();
        if state.session.take().is_some() {
            log::info!("session cleared");
        }
    }

    fn erase(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(IDENTITY_KEY);
        self.storage.remove(ROLE_KEY);
    }

    fn read_persisted(&self) -> Option<Session> {
        let token = self.storage.get(TOKEN_KEY).filter(|t| !t.is_empty())?;
        let raw_identity = self.storage.get(IDENTITY_KEY)?;
        let role = Role::parse(&self.storage.get(ROLE_KEY)?)?;
        let identity = serde_json::from_str::<Identity>(&raw_identity).ok()?;
        Some(Session { token, identity, role })
    }
}
