//! Browser transport over `gloo-net` (wasm32 only).
//!
//! Every request is sent with `credentials: include` so the browser stores
//! the session cookie from `/api/login` and attaches it to `/api/me`.

use async_trait::async_trait;
use gloo_net::http::Request;
use web_sys::RequestCredentials;

use crate::error::TransportError;
use crate::transport::{ApiRequest, ApiResponse, Method, Transport};

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

#[async_trait(?Send)]
impl Transport for BrowserTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        if request.carrier.forwarded_cookie().is_some() {
            // `Cookie` is a forbidden header for fetch; the jar is authoritative here.
            log::warn!("ignoring forwarded cookie in browser transport");
        }

        let builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
        }
        .credentials(RequestCredentials::Include);

        let built = match request.json_body {
            Some(body) => builder.header("Content-Type", "application/json").body(body),
            None => builder.build(),
        }
        .map_err(|e| TransportError(format!("failed to build request: {e}")))?;

        let resp = built.send().await.map_err(|e| TransportError(e.to_string()))?;
        let status = resp.status();
        let content_type = resp.headers().get("content-type");
        let body = resp.text().await.map_err(|e| TransportError(e.to_string()))?;

        Ok(ApiResponse { status, content_type, body })
    }
}
