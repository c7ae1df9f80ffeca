//! Route Guard for protected pages.
//!
//! Runs once per page request before the protected page is prepared:
//! `Pending -> {Authenticated(User), RedirectToLogin, Errored}`. No retry.

use crate::client::SessionClient;
use crate::error::AuthError;
use crate::transport::{CredentialCarrier, Transport};
use crate::types::User;

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

pub const LOGIN_ROUTE: &str = "/login";
pub const DASHBOARD_ROUTE: &str = "/dashboard";

/// Routes that require an authenticated session.
pub const PROTECTED_ROUTES: &[&str] = &[DASHBOARD_ROUTE];

/// Whether `path` is a protected route. A single trailing slash is tolerated.
#[must_use]
pub fn is_protected(path: &str) -> bool {
    let path = match path.strip_suffix('/') {
        Some(stripped) if !stripped.is_empty() => stripped,
        _ => path,
    };
    PROTECTED_ROUTES.contains(&path)
}

/// What the page should do once the session is known.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Render the page with this user as input.
    Render(User),
    /// Skip rendering and send the caller to [`LOGIN_ROUTE`].
    RedirectToLogin,
}

/// Per-request guard state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum GuardState {
    #[default]
    Pending,
    Authenticated(User),
    RedirectToLogin,
    Errored(AuthError),
}

impl GuardState {
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}

impl From<Result<GuardOutcome, AuthError>> for GuardState {
    fn from(result: Result<GuardOutcome, AuthError>) -> Self {
        match result {
            Ok(GuardOutcome::Render(user)) => Self::Authenticated(user),
            Ok(GuardOutcome::RedirectToLogin) => Self::RedirectToLogin,
            Err(e) => Self::Errored(e),
        }
    }
}

pub struct RouteGuard<'a, T> {
    client: &'a SessionClient<T>,
}

impl<'a, T: Transport> RouteGuard<'a, T> {
    pub fn new(client: &'a SessionClient<T>) -> Self {
        Self { client }
    }

    /// Resolve the session and decide between render and redirect.
    ///
    /// # Errors
    ///
    /// Propagates [`AuthError::SessionLoadFailed`] so the page fails loudly
    /// instead of looking logged out.
    pub async fn check(&self, carrier: CredentialCarrier) -> Result<GuardOutcome, AuthError> {
        match self.client.fetch_current_session(carrier).await? {
            Some(user) => Ok(GuardOutcome::Render(user)),
            None => Ok(GuardOutcome::RedirectToLogin),
        }
    }

    /// [`Self::check`] folded into a terminal [`GuardState`].
    pub async fn resolve(&self, carrier: CredentialCarrier) -> GuardState {
        self.check(carrier).await.into()
    }
}
