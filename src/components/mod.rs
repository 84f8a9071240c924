//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthProvider` and `ProtectedRoute` wire the session into the router; the
//! rest are presentation pieces shared by the portal pages.

pub mod account_fields;
pub mod admin_navigation;
pub mod alert_modal;
pub mod auth_provider;
pub mod confirm_dialog;
pub mod protected_route;
pub mod toast;
