//! Gateway configuration.
//!
//! One required value (the shared API secret) plus the bind address,
//! both supplied through the process environment at startup.

use std::net::SocketAddr;

use thiserror::Error;

/// Environment variable holding the shared API secret.
pub const API_KEY_ENV: &str = "SEARCH_API_KEY";

/// Environment variable overriding the bind address.
pub const BIND_ENV: &str = "WEBSIFT_BIND";

const DEFAULT_BIND: &str = "0.0.0.0:5000";

/// Configuration errors raised at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The shared API secret is not set.
    #[error("{API_KEY_ENV} must be set")]
    MissingApiKey,

    /// The bind address could not be parsed.
    #[error("invalid bind address '{value}': {reason}")]
    InvalidBindAddress {
        /// The offending address string
        value: String,
        /// Parser message
        reason: String,
    },
}

/// Runtime configuration for the gateway process.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Shared secret clients must present in `x-api-key`.
    pub api_key: String,
    /// Socket address the HTTP server binds to.
    pub bind_address: SocketAddr,
}

impl GatewayConfig {
    /// Builds a config with the given key and the default bind address.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            bind_address: SocketAddr::from(([0, 0, 0, 0], 5000)),
        }
    }

    /// Loads configuration from the process environment.
    ///
    /// # Errors
    /// - `ConfigError::MissingApiKey` - `SEARCH_API_KEY` unset or empty
    /// - `ConfigError::InvalidBindAddress` - `WEBSIFT_BIND` unparseable
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let bind = std::env::var(BIND_ENV).unwrap_or_else(|_| DEFAULT_BIND.to_string());
        let bind_address = bind
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::InvalidBindAddress {
                value: bind.clone(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            api_key,
            bind_address,
        })
    }
}
