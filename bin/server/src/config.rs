//! Centralized server configuration.
//!
//! This module provides strongly-typed configuration for the server,
//! loaded via the `config` crate from environment variables. Nested keys use
//! `__` as separator, e.g. `BACKEND__BASE_URL`.

use serde::Deserialize;
use std::time::Duration;

/// Server configuration.
#[derive(Debug, Default, Deserialize)]
pub struct ServerConfig {
    /// Integration backend configuration.
    #[serde(default)]
    pub backend: BackendConfig,
}

/// Where integration loads are sent.
#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    /// Root URL of the integration backend.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Whole-request timeout for a load, in seconds. Zero (the default)
    /// waits indefinitely.
    #[serde(default = "default_request_timeout_seconds")]
    pub request_timeout_seconds: u64,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_request_timeout_seconds() -> u64 {
    0
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_seconds: default_request_timeout_seconds(),
        }
    }
}

impl BackendConfig {
    /// Returns the request timeout, or `None` when disabled.
    #[must_use]
    pub fn request_timeout(&self) -> Option<Duration> {
        (self.request_timeout_seconds > 0)
            .then(|| Duration::from_secs(self.request_timeout_seconds))
    }
}

impl ServerConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration is present but invalid.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(
                config::Environment::default()
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_config_has_correct_defaults() {
        let config = BackendConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.request_timeout_seconds, 0);
        assert_eq!(config.request_timeout(), None);
    }

    #[test]
    fn empty_source_uses_defaults() {
        let config: ServerConfig = config::Config::builder()
            .build()
            .expect("build")
            .try_deserialize()
            .expect("deserialize");
        assert_eq!(config.backend.base_url, "http://localhost:8000");
        assert_eq!(config.backend.request_timeout(), None);
    }

    #[test]
    fn timeout_is_opt_in() {
        let config: ServerConfig = config::Config::builder()
            .set_override("backend.request_timeout_seconds", 45)
            .expect("override")
            .build()
            .expect("build")
            .try_deserialize()
            .expect("deserialize");
        assert_eq!(
            config.backend.request_timeout(),
            Some(Duration::from_secs(45))
        );
    }

    #[test]
    fn overrides_apply() {
        let config: ServerConfig = config::Config::builder()
            .set_override("backend.base_url", "http://integrations.internal:9000")
            .expect("override")
            .set_override("backend.request_timeout_seconds", 0)
            .expect("override")
            .build()
            .expect("build")
            .try_deserialize()
            .expect("deserialize");
        assert_eq!(config.backend.base_url, "http://integrations.internal:9000");
        assert_eq!(config.backend.request_timeout(), None);
    }
}
