//! Configuration management for the contact book driver.
//!
//! Values come from environment variables, optionally seeded from a `.env`
//! file. Nothing is required; every setting has a default.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for the contact book driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Log level used when `RUST_LOG` is unset (default: "error")
    pub log_level: String,

    /// Print the final book as JSON after the scripted run (default: false)
    pub json_output: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: Logging level (default: "error")
    /// - `CONTACT_BOOK_JSON`: `true`/`false`/`1`/`0` (default: false)
    pub fn from_env() -> ConfigResult<Self> {
        // dotenvy::dotenv() doesn't print to stdout
        let _ = dotenvy::dotenv();

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());
        if log_level.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let json_output = Self::parse_env_bool("CONTACT_BOOK_JSON", false)?;

        Ok(Config {
            log_level,
            json_output,
        })
    }

    /// Like [`Config::from_env`], but logs the outcome.
    ///
    /// Install the tracing subscriber first so failures are recorded.
    pub fn load() -> ConfigResult<Self> {
        match Self::from_env() {
            Ok(cfg) => {
                tracing::info!("Configuration loaded successfully");
                Ok(cfg)
            }
            Err(e) => {
                tracing::error!("Failed to load configuration: {}", e);
                Err(e)
            }
        }
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
            json_output: false,
        }
    }
}
