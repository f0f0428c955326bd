//! Configuration management for the contact registry binary.
//!
//! Configuration comes from environment variables, optionally seeded from a
//! `.env` file. Nothing here writes to stdout, which carries the JSON output.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for the `contact-registry` binary.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level used when `RUST_LOG` is not set (default: "error")
    pub log_level: String,

    /// Stop at the first rejected input line (default: false)
    pub fail_fast: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: Logging level (default: "error")
    /// - `REGISTRY_FAIL_FAST`: Abort on the first rejected line (default: false)
    pub fn from_env() -> ConfigResult<Self> {
        // Missing .env is fine; dotenvy doesn't print to stdout
        let _ = dotenvy::dotenv();

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());
        let fail_fast = Self::parse_env_bool("REGISTRY_FAIL_FAST", false)?;

        Ok(Config {
            log_level,
            fail_fast,
        })
    }

    /// Parse an environment variable as bool with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "true" | "1" => Ok(true),
                "false" | "0" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true, false, 1 or 0, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "error".to_string(),
            fail_fast: false,
        }
    }
}
