//! Configuration management for the tool relay.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables (optionally via a `.env` file) or
//! defaults.

use super::transport::HttpConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::warn;

/// Main configuration structure.
///
/// Server and client settings live side by side so a single `.env` can drive
/// both halves of the protocol.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// HTTP endpoint configuration.
    pub http: HttpConfig,

    /// Discovery client configuration.
    pub client: ClientConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

/// Configuration for the discovery client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the tool server, without a trailing path.
    pub base_url: String,

    /// Per-request timeout in seconds. A timed out call is reported as a
    /// transport error.
    pub timeout_secs: u64,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Load client config from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("TOOL_RELAY_SERVER_URL") {
            config.base_url = url;
        }

        if let Ok(timeout) = std::env::var("TOOL_RELAY_CLIENT_TIMEOUT_SECS") {
            match timeout.parse() {
                Ok(secs) => config.timeout_secs = secs,
                Err(_) => warn!(
                    "Ignoring invalid TOOL_RELAY_CLIENT_TIMEOUT_SECS={:?}, using {}s",
                    timeout, config.timeout_secs
                ),
            }
        }

        config
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout_secs: 30,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "tool-relay".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            http: HttpConfig::default(),
            client: ClientConfig::default(),
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
    /// Environment variables are expected to be prefixed with `TOOL_RELAY_`.
    /// For example: `TOOL_RELAY_SERVER_NAME`, `TOOL_RELAY_LOG_LEVEL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("TOOL_RELAY_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("TOOL_RELAY_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(timestamps) = std::env::var("TOOL_RELAY_LOG_TIMESTAMPS") {
            config.logging.with_timestamps = timestamps.to_lowercase() != "false" && timestamps != "0";
        }

        config.http = HttpConfig::from_env();
        config.client = ClientConfig::from_env();

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.name, "tool-relay");
        assert_eq!(config.http.port, 8000);
        assert_eq!(config.http.host, "127.0.0.1");
        assert_eq!(config.client.base_url, "http://localhost:8000");
        assert_eq!(config.client.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_server_settings_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("TOOL_RELAY_SERVER_NAME", "calc");
            std::env::set_var("TOOL_RELAY_HTTP_PORT", "9100");
            std::env::set_var("TOOL_RELAY_HTTP_CORS", "false");
        }
        let config = Config::from_env();
        assert_eq!(config.server.name, "calc");
        assert_eq!(config.http.port, 9100);
        assert!(!config.http.enable_cors);
        unsafe {
            std::env::remove_var("TOOL_RELAY_SERVER_NAME");
            std::env::remove_var("TOOL_RELAY_HTTP_PORT");
            std::env::remove_var("TOOL_RELAY_HTTP_CORS");
        }
    }

    #[test]
    fn test_client_settings_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("TOOL_RELAY_SERVER_URL", "http://tools.internal:8000");
            std::env::set_var("TOOL_RELAY_CLIENT_TIMEOUT_SECS", "5");
        }
        let client = ClientConfig::from_env();
        assert_eq!(client.base_url, "http://tools.internal:8000");
        assert_eq!(client.timeout_secs, 5);
        unsafe {
            std::env::remove_var("TOOL_RELAY_SERVER_URL");
            std::env::remove_var("TOOL_RELAY_CLIENT_TIMEOUT_SECS");
        }
    }

    #[test]
    fn test_invalid_timeout_falls_back() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("TOOL_RELAY_CLIENT_TIMEOUT_SECS", "soon");
        }
        assert_eq!(ClientConfig::from_env().timeout_secs, 30);
        unsafe {
            std::env::remove_var("TOOL_RELAY_CLIENT_TIMEOUT_SECS");
        }
    }
}
