//! Remote auth API location.
//!
//! The base URL comes from `API_BASE_URL`: read at runtime by the server host
//! and baked in at compile time for the browser bundle, which has no process
//! environment. Both paths share [`ApiConfig::resolve`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const API_BASE_URL_VAR: &str = "API_BASE_URL";
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

/// `POST` credentials, receive a session cookie.
pub const LOGIN_PATH: &str = "/api/login";
/// `GET` the user behind the current session cookie.
pub const SESSION_PATH: &str = "/api/me";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Normalize a raw base URL, falling back to [`DEFAULT_API_BASE_URL`]
    /// when it is absent or blank. Trailing slashes are stripped.
    #[must_use]
    pub fn resolve(raw: Option<&str>) -> Self {
        let raw = raw.map(str::trim).filter(|value| !value.is_empty());
        let base_url = raw
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_owned();
        Self { base_url }
    }

    /// Read `API_BASE_URL` from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::resolve(std::env::var(API_BASE_URL_VAR).ok().as_deref())
    }

    /// Read `API_BASE_URL` as it was when the crate was compiled.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::resolve(option_env!("API_BASE_URL"))
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path such as [`LOGIN_PATH`].
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::resolve(None)
    }
}
