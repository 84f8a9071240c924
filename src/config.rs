//! Build-time client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle has no process environment at runtime, so the backend base
//! URL is baked in at compile time from `HELPDESK_API_URL`. Local development
//! builds fall back to the backend's default port.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api/v1";

/// Suffix stripped from the API base to reach the backend origin that serves
/// uploaded complaint images.
const API_PATH_SUFFIX: &str = "/api/v1";

/// Backend base URL, without a trailing slash.
pub fn api_base_url() -> &'static str {
    resolve_base_url(option_env!("HELPDESK_API_URL"))
}

/// Origin used to build absolute links for backend-hosted assets.
pub fn asset_origin() -> &'static str {
    strip_api_suffix(api_base_url())
}

fn resolve_base_url(raw: Option<&'static str>) -> &'static str {
    match raw.map(str::trim) {
        Some(url) if !url.is_empty() => url.trim_end_matches('/'),
        _ => DEFAULT_API_BASE_URL,
    }
}

fn strip_api_suffix(base: &str) -> &str {
    base.strip_suffix(API_PATH_SUFFIX).unwrap_or(base)
}
