//! Browser Session Client construction.
//!
//! The API base URL is baked in at build time from `API_BASE_URL`; requests
//! carry the browser cookie jar (`credentials: include`).

#[cfg(feature = "hydrate")]
use session::{ApiConfig, SessionClient, browser_transport::BrowserTransport};

/// Session Client for code running in the browser.
#[cfg(feature = "hydrate")]
pub fn session_client() -> SessionClient<BrowserTransport> {
    SessionClient::new(ApiConfig::from_build_env(), BrowserTransport)
}
