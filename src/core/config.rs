//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure populated from
//! defaults and `MCP_`-prefixed environment variables (a `.env` file is
//! honoured).

use super::error::{Error, Result};
use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Default Looking Glass backend location.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000/looking-glass";

/// Default backend request timeout, in seconds.
pub const DEFAULT_BACKEND_TIMEOUT_SECS: u64 = 5;

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Looking Glass backend connection settings.
    pub backend: BackendConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Looking Glass backend configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL every endpoint path is appended to.
    pub base_url: String,

    /// Per-request timeout in seconds. Always finite.
    pub timeout_secs: u64,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BACKEND_URL.to_string(),
            timeout_secs: DEFAULT_BACKEND_TIMEOUT_SECS,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "looking-glass-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            backend: BackendConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_BACKEND_URL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(url) = std::env::var("MCP_BACKEND_URL") {
            config.backend.base_url = url.trim().trim_end_matches('/').to_string();
            info!("Looking glass backend set to {}", config.backend.base_url);
        }

        if let Ok(raw) = std::env::var("MCP_BACKEND_TIMEOUT_SECS") {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.backend.timeout_secs = secs,
                _ => warn!(
                    "Ignoring MCP_BACKEND_TIMEOUT_SECS={:?}, using {}s",
                    raw, DEFAULT_BACKEND_TIMEOUT_SECS
                ),
            }
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        config
    }

    /// Check the settings that cannot be defaulted away.
    pub fn validate(&self) -> Result<()> {
        let url = &self.backend.base_url;
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(Error::config(format!(
                "backend URL must start with http:// or https://, got {:?}",
                url
            )));
        }
        if self.backend.timeout_secs == 0 {
            return Err(Error::config("backend timeout must be at least 1 second"));
        }
        Ok(())
    }
}

/// Serializes tests that touch process environment variables.
#[cfg(test)]
pub(crate) static ENV_TEST_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
