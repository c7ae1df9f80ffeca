//! In-memory transport for unit tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::config::ApiConfig;
use crate::error::TransportError;
use crate::transport::{ApiRequest, ApiResponse, Transport};
use crate::SessionClient;

/// Replays queued results in order and records every request it sees.
#[derive(Default)]
pub(crate) struct ScriptedTransport {
    replies: Mutex<VecDeque<Result<ApiResponse, TransportError>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl ScriptedTransport {
    pub(crate) fn new(replies: Vec<Result<ApiResponse, TransportError>>) -> Self {
        Self { replies: Mutex::new(replies.into()), requests: Mutex::new(Vec::new()) }
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError("no scripted reply".to_owned())))
    }
}

pub(crate) fn json(status: u16, body: &str) -> Result<ApiResponse, TransportError> {
    Ok(ApiResponse { status, content_type: Some("application/json".to_owned()), body: body.to_owned() })
}

pub(crate) fn text(status: u16, body: &str) -> Result<ApiResponse, TransportError> {
    Ok(ApiResponse { status, content_type: Some("text/plain; charset=utf-8".to_owned()), body: body.to_owned() })
}

pub(crate) fn unreachable(message: &str) -> Result<ApiResponse, TransportError> {
    Err(TransportError(message.to_owned()))
}

pub(crate) const ALICE: &str =
    r#"{"uuid":"u1","username":"alice","email":null,"first_name":null,"last_name":null}"#;

pub(crate) fn client(replies: Vec<Result<ApiResponse, TransportError>>) -> SessionClient<ScriptedTransport> {
    SessionClient::new(ApiConfig::resolve(Some("http://api.test/")), ScriptedTransport::new(replies))
}
