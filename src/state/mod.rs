//! Shared client state provided through Leptos context.

pub mod auth;
pub mod session;
pub mod toast;
