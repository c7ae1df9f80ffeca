//! Error taxonomy for the session boundary.
//!
//! "No session" is deliberately absent here: a 401/403 on the session check
//! is a normal outcome and surfaces as `Ok(None)`, never as an error.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Fallback shown when a failed login carries no usable message.
pub const LOGIN_FALLBACK_MESSAGE: &str = "Unable to log in";
/// Fallback used when a failed session check carries no usable message.
pub const SESSION_FALLBACK_MESSAGE: &str = "Unable to load session";

/// Failure of a Session Client operation. `Display` is the carried message.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The login exchange failed (rejected credentials, malformed reply, transport).
    #[error("{0}")]
    AuthenticationFailed(String),
    /// The session check failed for any reason other than 401/403.
    #[error("{0}")]
    SessionLoadFailed(String),
}

impl AuthError {
    /// Message suitable for display to the user.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::AuthenticationFailed(message) | Self::SessionLoadFailed(message) => message,
        }
    }
}

/// The request never produced an HTTP response (DNS, connect, CORS, ...).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct TransportError(pub String);
