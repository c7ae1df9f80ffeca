//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected pages should apply identical unauthenticated redirect behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use session::guard::LOGIN_ROUTE;

use crate::state::auth::AuthState;

/// A settled check with neither a user nor an error means "no session".
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.user.is_none() && state.error.is_none()
}

/// Redirect to `/login` whenever auth has settled and no session exists.
///
/// Errors do not redirect: a failing session check must stay visible.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if auth.with(should_redirect_unauth) {
            navigate(LOGIN_ROUTE, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
