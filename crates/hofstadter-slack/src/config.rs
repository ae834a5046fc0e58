//! Configuration file parsing for the slash-command service.
//!
//! Loads the bind address and port from a TOML file. Every field has a
//! default, so the service also runs with no config file at all.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Service configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Service configuration loaded from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct SlackConfig {
    /// Bind address (e.g., "127.0.0.1")
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Bind port (e.g., 8080)
    #[serde(default = "default_bind_port")]
    pub bind_port: u16,
}

/// Default bind address: loopback only
fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

/// Default bind port: 8080
fn default_bind_port() -> u16 {
    8080
}

impl Default for SlackConfig {
    fn default() -> Self {
        SlackConfig {
            bind_address: default_bind_address(),
            bind_port: default_bind_port(),
        }
    }
}

impl SlackConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: SlackConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Get the full bind address (address:port)
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.bind_port)
    }
}
