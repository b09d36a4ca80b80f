//! Application configuration management
//!
//! This module handles loading and validating configuration from environment variables.
//! All configuration is loaded at startup and validated before commands are processed.

use std::env;
use std::path::PathBuf;

use crate::constants::{DEFAULT_LOG_FILTER, DEFAULT_LOG_FORMAT};

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub logging: LoggingConfig,
    pub io: IoConfig,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub rust_log: String,
    pub format: LogFormat,
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    /// Parse log format from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Command input and standings export locations
#[derive(Debug, Clone, Default)]
pub struct IoConfig {
    /// Read commands from this file instead of stdin
    pub input_path: Option<PathBuf>,
    /// Write final standings as JSON here on END
    pub standings_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            logging: LoggingConfig::from_env()?,
            io: IoConfig::from_env(),
        })
    }
}

impl LoggingConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let format = env::var("LOG_FORMAT").unwrap_or_else(|_| DEFAULT_LOG_FORMAT.to_string());

        Ok(Self {
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string()),
            format: LogFormat::parse(&format)
                .ok_or_else(|| ConfigError::InvalidValue("LOG_FORMAT".to_string()))?,
        })
    }
}

impl IoConfig {
    fn from_env() -> Self {
        Self {
            input_path: non_empty_var("SCOREBOARD_INPUT").map(PathBuf::from),
            standings_path: non_empty_var("SCOREBOARD_STANDINGS_PATH").map(PathBuf::from),
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parse() {
        assert_eq!(LogFormat::parse("json"), Some(LogFormat::Json));
        assert_eq!(LogFormat::parse("TEXT"), Some(LogFormat::Text));
        assert_eq!(LogFormat::parse("yaml"), None);
    }

    #[test]
    fn test_default_values() {
        let logging = LoggingConfig {
            rust_log: DEFAULT_LOG_FILTER.to_string(),
            format: LogFormat::Text,
        };
        assert_eq!(logging.rust_log, "warn");
        assert!(IoConfig::default().input_path.is_none());
    }
}
