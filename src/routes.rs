//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! A single Axum router serves the health probe, the compiled client assets
//! under `/pkg`, and every page route through Leptos SSR. Session state
//! lives in the browser; nothing here inspects it.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::error::ServerError;

/// Routes that do not go through the Leptos renderer.
pub fn api_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Full application: API routes, `/pkg` assets, and Leptos SSR.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn app(config: &ServerConfig) -> Result<Router, ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::LeptosConfig(e.to_string()))?;
    let mut leptos_options = conf.leptos_options;
    if let Some(site_root) = &config.site_root {
        leptos_options.site_root = site_root.to_string_lossy().as_ref().into();
    }
    let routes = generate_route_list(client::app::App);
    tracing::debug!(count = routes.len(), "leptos routes registered");

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(client::app::shell))
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
