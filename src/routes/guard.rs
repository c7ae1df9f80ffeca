//! Route guard middleware for server-rendered pages.
//!
//! DESIGN
//! ======
//! Protected paths resolve the session before Leptos renders anything. The
//! browser's `Cookie` header is forwarded to the auth API; the terminal
//! [`GuardState`] is left in request extensions for the page to read. Anything
//! other than an authenticated user never reaches the renderer.

use axum::extract::{Request, State};
use axum::http::header::COOKIE;
use axum::http::{HeaderMap, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use session::guard::{LOGIN_ROUTE, is_protected};
use session::{AuthError, CredentialCarrier, GuardOutcome, GuardState, RouteGuard, User};

use crate::state::AppState;

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

/// Joins every inbound `Cookie` header (HTTP/2 may split them) into one value.
pub(crate) fn forwarded_carrier(headers: &HeaderMap) -> CredentialCarrier {
    let joined = headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .collect::<Vec<_>>()
        .join("; ");
    CredentialCarrier::from_cookie_header(Some(&joined))
}

/// Map a guard result to the user to render, or the response that replaces
/// the page.
pub(crate) fn admit(result: Result<GuardOutcome, AuthError>) -> Result<User, Response> {
    match result {
        Ok(GuardOutcome::Render(user)) => Ok(user),
        Ok(GuardOutcome::RedirectToLogin) => Err(Redirect::to(LOGIN_ROUTE).into_response()),
        Err(e) => Err((StatusCode::BAD_GATEWAY, e.to_string()).into_response()),
    }
}

pub async fn require_session(State(state): State<AppState>, mut request: Request, next: Next) -> Response {
    let path = request.uri().path().to_owned();
    if !is_protected(&path) {
        return next.run(request).await;
    }

    let carrier = forwarded_carrier(request.headers());
    let result = RouteGuard::new(&state.session).check(carrier).await;
    if let Err(e) = &result {
        tracing::error!(%path, error = %e, "session check failed");
    }

    match admit(result) {
        Ok(user) => {
            tracing::debug!(%path, username = %user.username, "session admitted");
            request.extensions_mut().insert(GuardState::Authenticated(user));
            next.run(request).await
        }
        Err(response) => {
            tracing::debug!(%path, status = %response.status(), "guarded page not rendered");
            response
        }
    }
}
