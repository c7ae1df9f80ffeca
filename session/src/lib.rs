//! Session-authentication boundary for the RustyMine web front end.
//!
//! This crate owns everything between the rendered pages and the remote auth
//! API: the user model, the error taxonomy, API configuration, the transport
//! seam, and the three components composed during a page request.
//!
//! ARCHITECTURE
//! ============
//! - [`client::SessionClient`] performs `login` and `fetch_current_session`
//!   and normalizes every response into `User` / no-session / [`AuthError`].
//! - [`guard::RouteGuard`] resolves the session before a protected page
//!   renders and decides between render and redirect.
//! - [`login_form::LoginForm`] is the submission state machine behind the
//!   login page.
//!
//! The crate is framework-free: the Axum host and the Leptos client both
//! depend on it, each plugging in its own [`transport::Transport`].

pub mod client;
pub mod config;
pub mod error;
pub mod guard;
pub mod login_form;
pub mod transport;
pub mod types;

#[cfg(all(feature = "browser", target_arch = "wasm32"))]
pub mod browser_transport;
#[cfg(feature = "server")]
pub mod reqwest_transport;

#[cfg(test)]
pub(crate) mod test_support;

pub use client::SessionClient;
pub use config::ApiConfig;
pub use error::{AuthError, TransportError};
pub use guard::{GuardOutcome, GuardState, RouteGuard};
pub use login_form::{LoginForm, SubmitOutcome};
pub use transport::{CredentialCarrier, Transport};
pub use types::{Credentials, User};
