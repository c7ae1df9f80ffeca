//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This binary owns no API of its own. It renders the Leptos pages, serves the
//! hydrate bundle under `/pkg`, and runs the route guard in front of every
//! protected page so server-rendered HTML already reflects the session.

pub mod guard;

#[cfg(test)]
pub(crate) mod test_support;


use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::middleware;
use axum::response::Redirect;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use session::guard::DASHBOARD_ROUTE;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

async fn redirect_root() -> Redirect {
    Redirect::temporary(DASHBOARD_ROUTE)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Leptos SSR pages behind the route guard, plus static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    Ok(router(state, conf.leptos_options))
}

fn router(state: AppState, leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone())
        .layer(middleware::from_fn_with_state(state, guard::require_session));

    // WASM, JS and CSS produced by the hydrate build.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());
    let pkg_dir = site_root_path.join("pkg");

    Router::new()
        .route("/", get(redirect_root))
        .route("/healthz", get(healthz))
        .nest_service("/pkg", ServeDir::new(pkg_dir))
        .merge(leptos_router)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}
