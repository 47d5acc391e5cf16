//! Server configuration.
//!
//! Values come from environment variables, falling back to defaults:
//!
//! - `SUBWAY_ADDR`: socket address to bind (default `127.0.0.1:3000`)
//! - `SUBWAY_FINDER`: path finder implementation (default `dijkstra`)

use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;

/// Environment variable holding the bind address.
pub const ADDR_VAR: &str = "SUBWAY_ADDR";

/// Environment variable selecting the path finder.
pub const FINDER_VAR: &str = "SUBWAY_FINDER";

/// Error loading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Bind address does not parse
    #[error("invalid SUBWAY_ADDR {value:?}: {message}")]
    InvalidAddr { value: String, message: String },

    /// Finder name is not supported
    #[error("unsupported finder: {0:?}")]
    UnsupportedFinder(String),
}

/// Path finder implementation.
///
/// Only Dijkstra is available; the name is configurable so deployments
/// fail loudly if they ask for something else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Finder {
    #[default]
    Dijkstra,
}

impl FromStr for Finder {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("dijkstra") {
            Ok(Finder::Dijkstra)
        } else {
            Err(ConfigError::UnsupportedFinder(s.to_string()))
        }
    }
}

impl fmt::Display for Finder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finder::Dijkstra => f.write_str("dijkstra"),
        }
    }
}

/// Configuration for the subway server.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the HTTP server binds to.
    pub addr: SocketAddr,

    /// Path finder used for route queries.
    pub finder: Finder,
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(ADDR_VAR) {
            config.addr = value.parse().map_err(|e: std::net::AddrParseError| {
                ConfigError::InvalidAddr {
                    value: value.clone(),
                    message: e.to_string(),
                }
            })?;
        }

        if let Some(value) = lookup(FINDER_VAR) {
            config.finder = value.parse()?;
        }

        Ok(config)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            finder: Finder::Dijkstra,
        }
    }
}
