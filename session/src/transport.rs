//! Transport seam between the Session Client and the network.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser and the server reach the API differently: the browser lets the
//! fetch layer attach the cookie jar (`credentials: include`), while the
//! server must forward the inbound request's `Cookie` header by hand. Callers
//! state which case applies through [`CredentialCarrier`] instead of the
//! transport guessing from ambient state.

use serde_json::Value;

use crate::error::TransportError;

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

/// How the session cookie reaches the API for one request.
#[derive(Clone, PartialEq, Eq, Default)]
pub enum CredentialCarrier {
    /// Let the transport include whatever credentials it manages (browser).
    #[default]
    Ambient,
    /// Send this raw `Cookie` header value (server-side rendering).
    Forwarded(String),
}

impl CredentialCarrier {
    /// Carrier for an inbound request's `Cookie` header; absent or blank
    /// headers fall back to ambient credentials.
    #[must_use]
    pub fn from_cookie_header(header: Option<&str>) -> Self {
        match header.map(str::trim) {
            Some(value) if !value.is_empty() => Self::Forwarded(value.to_owned()),
            _ => Self::Ambient,
        }
    }

    /// The header value to forward, if any.
    #[must_use]
    pub fn forwarded_cookie(&self) -> Option<&str> {
        match self {
            Self::Ambient => None,
            Self::Forwarded(value) => Some(value),
        }
    }
}

// Cookie values are session secrets.
impl std::fmt::Debug for CredentialCarrier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ambient => f.write_str("Ambient"),
            Self::Forwarded(_) => f.write_str("Forwarded(<redacted>)"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// Fully built request handed to a [`Transport`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    /// Serialized JSON body; sent with `Content-Type: application/json`.
    pub json_body: Option<String>,
    pub carrier: CredentialCarrier,
}

impl ApiRequest {
    #[must_use]
    pub fn get(url: String, carrier: CredentialCarrier) -> Self {
        Self { method: Method::Get, url, json_body: None, carrier }
    }

    #[must_use]
    pub fn post_json(url: String, json_body: String, carrier: CredentialCarrier) -> Self {
        Self { method: Method::Post, url, json_body: Some(json_body), carrier }
    }
}

/// Raw HTTP response, before any interpretation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: String,
}

impl ApiResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Whether the response declares a JSON body.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|value| value.to_ascii_lowercase().contains("application/json"))
    }

    /// Decoded JSON body, or `None` when there is no usable payload.
    ///
    /// The content type is checked before decoding. A non-JSON, empty, or
    /// undecodable body is "no payload", never an error, so the status code
    /// keeps deciding the outcome.
    #[must_use]
    pub fn json_payload(&self) -> Option<Value> {
        if !self.is_json() || self.body.trim().is_empty() {
            return None;
        }
        match serde_json::from_str(&self.body) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("discarding undecodable JSON body (status {}): {e}", self.status);
                None
            }
        }
    }
}

/// Sends one request and returns the raw response.
///
/// Implementations must not retry, must not time out on their own, and must
/// honor the request's [`CredentialCarrier`].
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
pub trait Transport {
    /// # Errors
    ///
    /// Returns [`TransportError`] when no HTTP response was received.
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
}
