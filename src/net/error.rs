//! Errors surfaced by backend calls.
//!
//! ERROR HANDLING
//! ==============
//! Screens catch these at the call site and turn them into inline text with
//! [`ApiError::user_message`]. Only the 401 case also travels further, as an
//! `HttpEvent` raised by the client before the error is returned.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use super::types::ErrorBody;

pub const UNAUTHORIZED: u16 = 401;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Network(String),

    /// The backend rejected the credentials or the session.
    #[error("unauthorized")]
    Unauthorized { message: Option<String> },

    /// Any other non-success status.
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },

    /// The request body could not be encoded.
    #[error("request encode failed: {0}")]
    Encode(String),

    /// The success body did not match the expected shape.
    #[error("response parse failed: {0}")]
    Decode(String),

    /// Called during server rendering.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Classify a non-success response from its status and raw body.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .map(|m| m.trim().to_owned())
            .filter(|m| !m.is_empty());
        if status == UNAUTHORIZED {
            Self::Unauthorized { message }
        } else {
            Self::Status { status, message }
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// Backend-supplied message when there is one, else `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Unauthorized { message: Some(m) } | Self::Status { message: Some(m), .. } => m.clone(),
            _ => fallback.to_owned(),
        }
    }
}
