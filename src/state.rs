//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum middleware via the `State` extractor. It
//! holds the server-side Session Client; nothing about a session is stored
//! here, each page request resolves its own.

use std::sync::Arc;

use session::SessionClient;
use session::reqwest_transport::ReqwestTransport;

#[derive(Clone)]
pub struct AppState {
    pub session: Arc<SessionClient<ReqwestTransport>>,
}

impl AppState {
    #[must_use]
    pub fn new(session: SessionClient<ReqwestTransport>) -> Self {
        Self { session: Arc::new(session) }
    }
}
