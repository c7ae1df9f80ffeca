mod config;
mod routes;
mod state;

use session::SessionClient;
use session::reqwest_transport::ReqwestTransport;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::HostConfig::from_env().expect("invalid configuration");
    let transport = ReqwestTransport::new().expect("http client init failed");
    let state = state::AppState::new(SessionClient::new(config.api.clone(), transport));

    let app = routes::app(state).expect("router init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, api = config.api.base_url(), "rustymine-web listening");
    axum::serve(listener, app).await.expect("server failed");
}
