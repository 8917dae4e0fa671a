//! Configuration management with environment variable support.
//!
//! Configuration loads from the process environment under the `AGROLINK_`
//! prefix (optionally seeded from a `.env` file), with defaults carrying the
//! values the site ships with.
//!
//! # Example
//!
//! ```ignore
//! use agrolink_core::{load_dotenv, AppConfig, Environment};
//!
//! load_dotenv();
//! let config = AppConfig::from_env().expect("Failed to load config");
//! let env = Environment::current();
//! ```

use serde::Deserialize;
use thiserror::Error;

/// Error type for configuration loading failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Environment variable deserialization failed.
    #[error("Configuration error: {0}")]
    Envy(#[from] envy::Error),
}

/// Environment profile for the application.
///
/// Detected from the `AGROLINK_ENV` environment variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    /// Development environment with verbose diagnostics.
    Development,
    /// Production environment with diagnostics reduced to info level.
    Production,
    /// Custom environment name for specialized deployments.
    Custom(String),
}

impl Environment {
    /// Detect the current environment from `AGROLINK_ENV`.
    ///
    /// Returns:
    /// - `Production` if `AGROLINK_ENV` is "production" or "prod"
    /// - `Development` if `AGROLINK_ENV` is "development", "dev", or not set
    /// - `Custom(name)` for any other value
    pub fn current() -> Self {
        match std::env::var("AGROLINK_ENV").as_deref() {
            Ok("production") | Ok("prod") => Self::Production,
            Ok("development") | Ok("dev") => Self::Development,
            Ok(other) => Self::Custom(other.to_string()),
            Err(_) => Self::Development,
        }
    }

    /// Check if running in production mode.
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    /// Check if running in development mode.
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    /// Get the environment name as a string.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Custom(name) => name,
        }
    }

    /// Default log level for this environment.
    ///
    /// Production suppresses debug output; everything else keeps it.
    pub fn default_log_level(&self) -> &str {
        if self.is_production() {
            "info"
        } else {
            "debug"
        }
    }
}

/// Load a `.env` file into the process environment, if one exists.
///
/// Missing files are not an error; existing process variables win.
pub fn load_dotenv() {
    let _ = dotenvy::dotenv();
}

/// Application configuration.
///
/// Every field has a default matching the shipped deployment, so
/// `AppConfig::default()` is a fully working configuration and environment
/// variables (`AGROLINK_RECIPIENT`, `AGROLINK_RATE_WINDOW_SECS`, ...) only
/// override what they name.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Dispatch recipient: the fixed phone number inquiries are sent to.
    pub recipient: String,
    /// Company name interpolated into inquiry greetings.
    pub company_name: String,
    /// Host suffixes permitted as outbound dispatch targets.
    pub allowed_domains: Vec<String>,
    /// Global cap on accepted input length, available to rule sets.
    pub input_max_length: usize,
    /// Default rate limiter window, in seconds.
    pub rate_window_secs: u64,
    /// Default rate limiter capacity within one window.
    pub rate_max_requests: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            recipient: "917397248359".to_string(),
            company_name: "HKS Provisions".to_string(),
            allowed_domains: vec![
                "wa.me".to_string(),
                "api.whatsapp.com".to_string(),
                "images.unsplash.com".to_string(),
            ],
            input_max_length: 1000,
            rate_window_secs: 60,
            rate_max_requests: 10,
        }
    }
}

impl AppConfig {
    /// Load the configuration from `AGROLINK_`-prefixed environment
    /// variables, falling back to defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(envy::prefixed("AGROLINK_").from_env::<AppConfig>()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_shipped_deployment() {
        let config = AppConfig::default();
        assert_eq!(config.recipient, "917397248359");
        assert_eq!(config.company_name, "HKS Provisions");
        assert!(config.allowed_domains.contains(&"wa.me".to_string()));
        assert_eq!(config.rate_window_secs, 60);
        assert_eq!(config.rate_max_requests, 10);
    }

    #[test]
    fn environment_log_levels() {
        assert_eq!(Environment::Production.default_log_level(), "info");
        assert_eq!(Environment::Development.default_log_level(), "debug");
        assert_eq!(
            Environment::Custom("staging".to_string()).default_log_level(),
            "debug"
        );
    }

    #[test]
    fn environment_as_str() {
        assert_eq!(Environment::Production.as_str(), "production");
        assert_eq!(Environment::Development.as_str(), "development");
        assert_eq!(Environment::Custom("staging".to_string()).as_str(), "staging");
    }
}
