//! Session configuration.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use serde::{Deserialize, Serialize};
use std::env;

/// Default log directive when neither `RUST_LOG` nor `LENDING_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "warn,lending_cli=info,lending_core=info";

/// How listings are rendered.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `Display` line per record
    #[default]
    Text,

    /// A single JSON array per listing
    Json,
}

/// Session configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionConfig {
    /// tracing-subscriber filter directive
    pub log_filter: String,

    /// Listing format
    pub output: OutputFormat,

    /// Print the welcome banner before the first menu
    pub banner: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            output: OutputFormat::Text,
            banner: true,
        }
    }
}

impl SessionConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = SessionConfig::default();

        let output = match lookup("LENDING_OUTPUT") {
            None => defaults.output,
            Some(value) => match value.trim().to_ascii_lowercase().as_str() {
                "text" => OutputFormat::Text,
                "json" => OutputFormat::Json,
                _ => return Err(ConfigError::InvalidValue("LENDING_OUTPUT".to_string())),
            },
        };

        let banner = match lookup("LENDING_BANNER") {
            None => defaults.banner,
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("LENDING_BANNER".to_string()))?,
        };

        Ok(SessionConfig {
            log_filter: lookup("LENDING_LOG").unwrap_or(defaults.log_filter),
            output,
            banner,
        })
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
