//! Stand-in auth API and request helpers for router tests.

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::header::{CONTENT_TYPE, COOKIE};
use axum::http::{HeaderMap, Request, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use session::reqwest_transport::ReqwestTransport;
use session::{ApiConfig, SessionClient};
use tower::ServiceExt;

use crate::state::AppState;

pub(crate) const ALICE: &str = r#"{"uuid":"u-1","username":"alice","email":"alice@example.com"}"#;

/// Serves `/api/me` on an ephemeral port, answering by forwarded cookie.
pub(crate) async fn spawn_api() -> String {
    let api = Router::new().route(
        "/api/me",
        get(|headers: HeaderMap| async move {
            let json = [(CONTENT_TYPE, "application/json")];
            match headers.get(COOKIE).and_then(|v| v.to_str().ok()) {
                Some("session=valid") => (StatusCode::OK, json, ALICE).into_response(),
                Some("session=broken") => (StatusCode::OK, json, r#"{"uuid":"u-1"}"#).into_response(),
                Some("session=outage") => {
                    (StatusCode::INTERNAL_SERVER_ERROR, json, r#"{"message":"database unavailable"}"#).into_response()
                }
                _ => StatusCode::FORBIDDEN.into_response(),
            }
        }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, api).await.unwrap();
    });
    format!("http://{addr}")
}

/// App state pointed at a fresh [`spawn_api`].
pub(crate) async fn api_state() -> AppState {
    let config = ApiConfig::resolve(Some(&spawn_api().await));
    AppState::new(SessionClient::new(config, ReqwestTransport::new().unwrap()))
}

pub(crate) async fn get_page(app: Router, path: &str, cookie: Option<&str>) -> Response {
    let mut builder = Request::builder().uri(path);
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    app.oneshot(builder.body(Body::empty()).unwrap()).await.unwrap()
}

pub(crate) async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
