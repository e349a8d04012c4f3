//! SSR server for the Anscer Robotics site.
//!
//! Renders the `client` Leptos app, serves its compiled assets, and exposes a
//! health probe. Configuration comes from the environment (optionally a
//! `.env` file) and the `[package.metadata.leptos]` table.

mod config;
mod error;
mod routes;

use std::process::ExitCode;

use config::ServerConfig;
use error::ServerError;

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env is fine; the real environment still applies.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "anscer-site stopped");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ServerError> {
    let config = ServerConfig::from_env()?;
    let app = routes::app(&config)?;

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .map_err(|source| ServerError::Bind { addr: config.addr, source })?;

    tracing::info!(addr = %config.addr, "anscer-site listening");
    axum::serve(listener, app).await?;
    Ok(())
}
