//! Networking modules for the helpdesk REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` is the single choke point for outgoing requests, `services` names the
//! endpoints, `types` defines the wire schema and `error` the failure taxonomy.

pub mod error;
pub mod http;
pub mod services;
pub mod types;
