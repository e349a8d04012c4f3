//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use crate::error::ServerError;

pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    /// Overrides the Leptos `site-root` holding the compiled `/pkg` assets.
    pub site_root: Option<PathBuf>,
}

impl ServerConfig {
    /// Build typed server config from the process environment.
    ///
    /// Optional:
    /// - `HOST`: bind address, default `0.0.0.0`
    /// - `PORT`: default 3000
    /// - `SITE_ROOT`: asset directory, default from `[package.metadata.leptos]`
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::InvalidEnv`] when `HOST` or `PORT` is malformed.
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`] with an explicit variable source.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::InvalidEnv`] when `HOST` or `PORT` is malformed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ServerError> {
        let host = parse_host(lookup("HOST").as_deref())?;
        let port = parse_port(lookup("PORT").as_deref())?;
        let site_root = lookup("SITE_ROOT")
            .map(|raw| raw.trim().to_owned())
            .filter(|raw| !raw.is_empty())
            .map(PathBuf::from);
        Ok(Self { addr: SocketAddr::new(host, port), site_root })
    }
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}

/// Parse `PORT`, falling back to [`DEFAULT_PORT`] when unset or blank.
///
/// # Errors
///
/// Returns [`ServerError::InvalidEnv`] when the value is not a `u16`.
pub fn parse_port(raw: Option<&str>) -> Result<u16, ServerError> {
    match non_blank(raw) {
        None => Ok(DEFAULT_PORT),
        Some(value) => value.parse().map_err(|e: std::num::ParseIntError| ServerError::InvalidEnv {
            var: "PORT",
            value: value.to_owned(),
            reason: e.to_string(),
        }),
    }
}

/// Parse `HOST`, falling back to [`DEFAULT_HOST`] when unset or blank.
///
/// # Errors
///
/// Returns [`ServerError::InvalidEnv`] when the value is not an IP address.
pub fn parse_host(raw: Option<&str>) -> Result<IpAddr, ServerError> {
    match non_blank(raw) {
        None => Ok(DEFAULT_HOST),
        Some(value) => value.parse().map_err(|e: std::net::AddrParseError| ServerError::InvalidEnv {
            var: "HOST",
            value: value.to_owned(),
            reason: e.to_string(),
        }),
    }
}
