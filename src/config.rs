//! Configuration management for the BR Fields MCP Server.
//!
//! This module handles loading and validating configuration from environment variables.
//! It avoids polluting stdout (which MCP uses for communication) by loading the
//! .env file through `dotenvy`, which never prints.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::time::Duration;

/// Default directory service (ViaCEP).
pub const DEFAULT_POSTAL_LOOKUP_URL: &str = "https://viacep.com.br/ws";

/// Configuration for the BR Fields MCP Server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the postal-code directory service
    pub postal_lookup_url: String,

    /// HTTP request timeout in seconds (default: 10, 0 disables the timeout)
    pub request_timeout: u64,

    /// Maximum lookups in flight for a batch request (default: 4)
    pub max_concurrent_lookups: usize,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// All variables are optional:
    /// - `POSTAL_LOOKUP_BASE_URL`: directory service base URL (default: ViaCEP)
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds, 0 for none (default: 10)
    /// - `MAX_CONCURRENT_LOOKUPS`: batch lookup concurrency (default: 4)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let postal_lookup_url = env::var("POSTAL_LOOKUP_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_POSTAL_LOOKUP_URL.to_string());

        // Validate URL format
        if !postal_lookup_url.starts_with("http://") && !postal_lookup_url.starts_with("https://")
        {
            return Err(ConfigError::InvalidValue {
                var: "POSTAL_LOOKUP_BASE_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;
        let max_concurrent_lookups = Self::parse_env_usize("MAX_CONCURRENT_LOOKUPS", 4)?;

        if max_concurrent_lookups == 0 {
            return Err(ConfigError::InvalidValue {
                var: "MAX_CONCURRENT_LOOKUPS".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            postal_lookup_url,
            request_timeout,
            max_concurrent_lookups,
            log_level,
        })
    }

    /// The HTTP timeout to apply, if any.
    pub fn timeout(&self) -> Option<Duration> {
        (self.request_timeout > 0).then(|| Duration::from_secs(self.request_timeout))
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            postal_lookup_url: DEFAULT_POSTAL_LOOKUP_URL.to_string(),
            request_timeout: 10,
            max_concurrent_lookups: 4,
            log_level: "error".to_string(),
        }
    }
}
