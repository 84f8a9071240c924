//! HTTP client wrapper every backend call goes through.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call returns `ApiError::Unavailable`.
//!
//! DESIGN
//! ======
//! Two concerns are applied uniformly here:
//! - outbound, the session token (if any) is attached as a bearer credential;
//! - inbound, a 401 is published as [`HttpEvent::Unauthorized`] on a signal
//!   owned by the app. This module never looks at the browser location; the
//!   app decides what the event means for the current page.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use leptos::prelude::*;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::{ApiError, UNAUTHORIZED};
use super::types::Envelope;
use crate::state::auth::AuthController;

/// Cross-cutting events raised by the HTTP layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpEvent {
    /// A response carried status 401.
    Unauthorized,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

#[derive(Clone, Debug, PartialEq)]
enum Body {
    Empty,
    Json(serde_json::Value),
    /// Sent as `multipart/form-data`.
    Form(Vec<(String, String)>),
}

/// A backend request relative to the API base URL.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    body: Body,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), query: Vec::new(), body: Body::Empty }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    #[must_use]
    pub fn query(mut self, key: &str, value: &str) -> Self {
        self.query.push((key.to_owned(), value.to_owned()));
        self
    }

    #[must_use]
    pub fn query_pairs(mut self, pairs: &[(&str, &str)]) -> Self {
        for (key, value) in pairs {
            self.query.push(((*key).to_owned(), (*value).to_owned()));
        }
        self
    }

    /// Attach a JSON body.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Encode` if `body` cannot be serialized.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, ApiError> {
        let value = serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.body = Body::Json(value);
        Ok(self)
    }

    /// Attach multipart form fields.
    #[must_use]
    pub fn form(mut self, fields: &[(&str, &str)]) -> Self {
        self.body = Body::Form(fields.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect());
        self
    }

    pub fn method(&self) -> Method {
        self.method
    }

    /// Absolute URL of the request, query string included.
    pub fn url(&self, base_url: &str) -> String {
        let mut url = join_url(base_url, &self.path);
        if !self.query.is_empty() {
            let query = url::form_urlencoded::Serializer::new(String::new())
                .extend_pairs(self.query.iter())
                .finish();
            url.push('?');
            url.push_str(&query);
        }
        url
    }
}

/// Join the API base and a path, tolerating slashes on either side.
pub fn join_url(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// `Authorization` header value for `token`, if there is a usable token.
pub fn bearer_value(token: Option<&str>) -> Option<String> {
    token.map(str::trim).filter(|t| !t.is_empty()).map(|t| format!("Bearer {t}"))
}

/// Unwrap the `{ status, data }` envelope of a success body.
///
/// # Errors
///
/// Returns `ApiError::Decode` when the body is not an envelope around `T`.
pub fn decode_envelope<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str::<Envelope<T>>(body)
        .map(|envelope| envelope.data)
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Backend client shared through context.
#[derive(Clone, Copy)]
pub struct ApiClient {
    base_url: &'static str,
    auth: AuthController,
    events: RwSignal<Option<HttpEvent>>,
}

impl ApiClient {
    pub fn new(base_url: &'static str, auth: AuthController, events: RwSignal<Option<HttpEvent>>) -> Self {
        Self { base_url, auth, events }
    }

    pub fn base_url(&self) -> &'static str {
        self.base_url
    }

    /// Header value for the current session, read without tracking.
    pub fn authorization(&self) -> Option<String> {
        bearer_value(self.auth.token_untracked().as_deref())
    }

    /// Send `request` and decode the enveloped payload.
    ///
    /// # Errors
    ///
    /// Returns the transport, status, or decode failure. A 401 additionally
    /// raises `HttpEvent::Unauthorized` before the error is returned.
    pub async fn fetch<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, ApiError> {
        let body = self.execute(request).await?;
        decode_envelope(&body)
    }

    /// Send `request`, discarding the success body.
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::fetch`], minus decoding.
    pub async fn send(&self, request: ApiRequest) -> Result<(), ApiError> {
        self.execute(request).await.map(|_| ())
    }

    fn publish(&self, event: HttpEvent) {
        self.events.set(Some(event));
    }

    /// Turn a raw response into the body or an error, raising the 401 event.
    #[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
    fn settle(&self, status: u16, body: String) -> Result<String, ApiError> {
        if (200..300).contains(&status) {
            return Ok(body);
        }
        if status == UNAUTHORIZED {
            self.publish(HttpEvent::Unauthorized);
        }
        Err(ApiError::from_response(status, &body))
    }

    #[cfg(feature = "hydrate")]
    async fn execute(&self, request: ApiRequest) -> Result<String, ApiError> {
        use gloo_net::http::RequestBuilder;

        let url = request.url(self.base_url);
        let method = match request.method {
            Method::Get => gloo_net::http::Method::GET,
            Method::Post => gloo_net::http::Method::POST,
            Method::Put => gloo_net::http::Method::PUT,
            Method::Delete => gloo_net::http::Method::DELETE,
        };
        let mut builder = RequestBuilder::new(&url).method(method);
        if let Some(value) = self.authorization() {
            builder = builder.header("Authorization", &value);
        }
        let built = match request.body {
            Body::Empty => builder.build(),
            Body::Json(value) => builder.json(&value),
            Body::Form(fields) => {
                let form = web_sys::FormData::new().map_err(|e| ApiError::Encode(format!("{e:?}")))?;
                for (key, value) in &fields {
                    form.append_with_str(key, value)
                        .map_err(|e| ApiError::Encode(format!("{e:?}")))?;
                }
                builder.body(form)
            }
        };
        let response = built
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        if !response.ok() {
            log::debug!("{:?} {url} -> {status}", request.method);
        }
        self.settle(status, text)
    }

    #[cfg(not(feature = "hydrate"))]
    async fn execute(&self, request: ApiRequest) -> Result<String, ApiError> {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// Fetch the `ApiClient` provided by `AuthProvider`.
///
/// # Panics
///
/// Panics when called outside an `AuthProvider` subtree.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
        .unwrap_or_else(|| panic!("use_api called outside of <AuthProvider>: wrap the routes in AuthProvider"))
}
