//! Connection settings for the whale tracker API.

use crate::error::ConfigError;
use std::time::Duration;

/// Public deployment of the whale tracker API
pub const DEFAULT_BASE_URL: &str = "https://crypto-whale-tracker-api.onrender.com";

/// Environment variable holding the API base URL
pub const BASE_URL_VAR: &str = "WHALE_API_BASE_URL";

/// Environment variable holding the per-request timeout in seconds
pub const TIMEOUT_VAR: &str = "WHALE_API_TIMEOUT_SECS";

/// API client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL the endpoint paths are resolved against
    pub base_url: String,
    /// Upper bound on a single request, connect included
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

impl ApiConfig {
    /// Create a new configuration with custom base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Set request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Read `WHALE_API_BASE_URL` and `WHALE_API_TIMEOUT_SECS`, falling back to defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ApiConfig::from_env`] over an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(BASE_URL_VAR).filter(|url| !url.trim().is_empty()) {
            config.base_url = url.trim().to_string();
        }

        if let Some(raw) = lookup(TIMEOUT_VAR) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::InvalidValue {
                    key: TIMEOUT_VAR,
                    value: raw.clone(),
                })?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }
}
