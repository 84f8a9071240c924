//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped loading and form state and delegates shared
//! chrome to `components`. Admin and worker pages assume they are mounted
//! under `ProtectedRoute`.

pub mod admin_complaints;
pub mod admin_dashboard;
pub mod admin_settings;
pub mod admin_workers;
pub mod home;
pub mod login;
pub mod staff_complaint;
pub mod worker_dashboard;
