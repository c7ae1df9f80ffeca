//! Session Client: the single point of contact with the remote auth API.
//!
//! DESIGN
//! ======
//! Network I/O lives behind [`Transport`]; deciding what a response means is
//! done by the pure [`interpret_login`] / [`interpret_session`] functions so
//! the decision tables can be tested without a server.
//!
//! | operation | response                          | result                      |
//! |-----------|-----------------------------------|-----------------------------|
//! | login     | 2xx + valid user                  | `Ok(user)`                  |
//! | login     | anything else                     | `AuthenticationFailed(msg)` |
//! | session   | 401 / 403                         | `Ok(None)`                  |
//! | session   | 2xx + valid user                  | `Ok(Some(user))`            |
//! | session   | anything else                     | `SessionLoadFailed(msg)`    |
//!
//! `msg` is the body's `message` when a JSON body carries one, else a fallback.

use serde::Deserialize;
use serde_json::Value;

use crate::config::{ApiConfig, LOGIN_PATH, SESSION_PATH};
use crate::error::{AuthError, LOGIN_FALLBACK_MESSAGE, SESSION_FALLBACK_MESSAGE};
use crate::transport::{ApiRequest, ApiResponse, CredentialCarrier, Transport};
use crate::types::{ApiErrorBody, Credentials, User};

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

pub struct SessionClient<T> {
    config: ApiConfig,
    transport: T,
}

impl<T: Transport> SessionClient<T> {
    pub fn new(config: ApiConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Exchange credentials for a session cookie via `POST /api/login`.
    ///
    /// The request is sent with ambient credentials so the calling runtime
    /// keeps the cookie set by the response.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::AuthenticationFailed`] when the API rejects the
    /// credentials, replies without a valid user, or cannot be reached.
    pub async fn login(&self, credentials: &Credentials) -> Result<User, AuthError> {
        let body = serde_json::to_string(credentials)
            .map_err(|e| AuthError::AuthenticationFailed(format!("failed to encode login request: {e}")))?;
        let request = ApiRequest::post_json(self.config.url(LOGIN_PATH), body, CredentialCarrier::Ambient);

        let resp = self.transport.send(request).await.map_err(|e| {
            log::warn!("login request failed: {e}");
            AuthError::AuthenticationFailed(e.0)
        })?;

        let result = interpret_login(&resp);
        match &result {
            Ok(user) => log::info!("login succeeded for {}", user.username),
            Err(e) => log::warn!("login rejected (status {}): {e}", resp.status),
        }
        result
    }

    /// Resolve the user behind the current session via `GET /api/me`.
    ///
    /// Pass [`CredentialCarrier::Forwarded`] with the inbound `Cookie` header
    /// when running during server-side rendering, and
    /// [`CredentialCarrier::Ambient`] in the browser.
    ///
    /// Returns `Ok(None)` when the API answers 401 or 403.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::SessionLoadFailed`] for any other non-2xx status,
    /// a 2xx reply without a valid user, or a transport failure.
    pub async fn fetch_current_session(&self, carrier: CredentialCarrier) -> Result<Option<User>, AuthError> {
        let request = ApiRequest::get(self.config.url(SESSION_PATH), carrier);

        let resp = self.transport.send(request).await.map_err(|e| {
            log::warn!("session request failed: {e}");
            AuthError::SessionLoadFailed(e.0)
        })?;

        let result = interpret_session(&resp);
        match &result {
            Ok(Some(user)) => log::debug!("session resolved for {}", user.username),
            Ok(None) => log::debug!("no active session (status {})", resp.status),
            Err(e) => log::warn!("session check failed (status {}): {e}", resp.status),
        }
        result
    }
}

/// Interpret a `POST /api/login` response.
///
/// # Errors
///
/// Returns [`AuthError::AuthenticationFailed`] unless the response is 2xx
/// with a valid user payload.
pub fn interpret_login(resp: &ApiResponse) -> Result<User, AuthError> {
    let payload = resp.json_payload();
    if resp.is_success() {
        if let Some(user) = payload.as_ref().and_then(user_from_payload) {
            return Ok(user);
        }
    }
    Err(AuthError::AuthenticationFailed(failure_message(payload.as_ref(), LOGIN_FALLBACK_MESSAGE)))
}

/// Interpret a `GET /api/me` response.
///
/// # Errors
///
/// Returns [`AuthError::SessionLoadFailed`] unless the response is 401/403
/// or 2xx with a valid user payload.
pub fn interpret_session(resp: &ApiResponse) -> Result<Option<User>, AuthError> {
    if is_unauthenticated_status(resp.status) {
        return Ok(None);
    }
    let payload = resp.json_payload();
    if resp.is_success() {
        if let Some(user) = payload.as_ref().and_then(user_from_payload) {
            return Ok(Some(user));
        }
    }
    Err(AuthError::SessionLoadFailed(failure_message(payload.as_ref(), SESSION_FALLBACK_MESSAGE)))
}

/// 401 and 403 both mean "no session", whatever the body says.
#[must_use]
pub fn is_unauthenticated_status(status: u16) -> bool {
    matches!(status, 401 | 403)
}

/// A payload is a user only if it decodes and carries a non-empty username.
fn user_from_payload(payload: &Value) -> Option<User> {
    let user = User::deserialize(payload).ok()?;
    (!user.username.is_empty()).then_some(user)
}

fn failure_message(payload: Option<&Value>, fallback: &str) -> String {
    payload
        .and_then(|value| ApiErrorBody::deserialize(value).ok())
        .and_then(|body| body.message)
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| fallback.to_owned())
}
