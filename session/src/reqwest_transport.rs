//! Server-side transport over `reqwest`.
//!
//! There is no cookie jar on the server: the only cookie sent is the one the
//! caller forwards from the inbound page request. No timeout is configured,
//! matching the browser's fetch defaults.

use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, COOKIE};

use crate::error::TransportError;
use crate::transport::{ApiRequest, ApiResponse, Method, Transport};

#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    /// # Errors
    ///
    /// Returns [`TransportError`] if the HTTP client cannot be built (TLS backend init).
    pub fn new() -> Result<Self, TransportError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| TransportError(format!("http client build failed: {e}")))?;
        Ok(Self { http })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let mut builder = match request.method {
            Method::Get => self.http.get(&request.url),
            Method::Post => self.http.post(&request.url),
        };
        if let Some(cookie) = request.carrier.forwarded_cookie() {
            builder = builder.header(COOKIE, cookie);
        }
        if let Some(body) = request.json_body {
            builder = builder.header(CONTENT_TYPE, "application/json").body(body);
        }

        let resp = builder.send().await.map_err(|e| TransportError(e.to_string()))?;
        let status = resp.status().as_u16();
        let content_type = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let body = resp.text().await.map_err(|e| TransportError(e.to_string()))?;

        Ok(ApiResponse { status, content_type, body })
    }
}
