//! Auth-session state for the current page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the dashboard's guard and user-aware views to coordinate login
//! redirects and identity-dependent rendering.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::{Deserialize, Serialize};
use session::{GuardState, User};

/// Authentication state tracking the current user, loading status, and any
/// session-check failure.
///
/// Serializable so the server's guard result travels into hydration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
    pub error: Option<String>,
}

impl AuthState {
    /// Session not resolved yet.
    pub fn pending() -> Self {
        Self { user: None, loading: true, error: None }
    }

    pub fn from_guard(state: GuardState) -> Self {
        match state {
            GuardState::Pending => Self::pending(),
            GuardState::Authenticated(user) => Self { user: Some(user), loading: false, error: None },
            GuardState::RedirectToLogin => Self::default(),
            GuardState::Errored(e) => Self { user: None, loading: false, error: Some(e.message().to_owned()) },
        }
    }

    /// Guard result the host stored in the request extensions, or pending
    /// when no guard ran (unprotected route, or outside a server render).
    pub fn initial() -> Self {
        #[cfg(feature = "ssr")]
        {
            use leptos::prelude::use_context;

            if let Some(state) = use_context::<axum::http::request::Parts>()
                .and_then(|parts| parts.extensions.get::<GuardState>().cloned())
            {
                return Self::from_guard(state);
            }
        }
        Self::pending()
    }
}

/// Starting auth state shared between the server render and hydration.
///
/// The server computes [`AuthState::initial`] and serializes it into the
/// page; the browser decodes that value instead of starting over. Only a
/// render without server data (client-side navigation) starts `pending`.
pub fn shared_initial() -> AuthState {
    leptos::server::SharedValue::new(AuthState::initial).into_inner()
}
