//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep routing policy, storage access and form rules out of
//! page components so they can be unit tested on the host.

pub mod auth;
pub mod display;
pub mod forms;
pub mod session_storage;
