//! Startup and serve errors for the SSR binary.

use std::net::SocketAddr;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid {var} value {value:?}: {reason}")]
    InvalidEnv { var: &'static str, value: String, reason: String },
    #[error("leptos configuration: {0}")]
    LeptosConfig(String),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("server failed: {0}")]
    Serve(#[from] std::io::Error),
}
