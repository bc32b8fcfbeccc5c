//! Preview server configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read once at startup from the environment. Every value has a default that
//! works from a fresh checkout, so `cargo run` needs no setup beyond building
//! the wasm bundle into `website/pkg`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::num::ParseIntError;
use std::path::PathBuf;

/// Port used when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT {value:?}: {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// TCP port to listen on (`PORT`).
    pub port: u16,
    /// Static site root (`WEBSITE_DIR`).
    pub website_dir: PathBuf,
    /// wasm-pack output served under `/pkg` (`PKG_DIR`).
    pub pkg_dir: PathBuf,
}

impl Config {
    /// Load configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] if `PORT` is set but not a port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] if `PORT` is set but not a port number.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            None => DEFAULT_PORT,
        };

        let website_dir = lookup("WEBSITE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("website"));

        let pkg_dir = lookup("PKG_DIR").map_or_else(|| website_dir.join("pkg"), PathBuf::from);

        Ok(Self { port, website_dir, pkg_dir })
    }
}
