//! HTTP client configuration for collection sources.

use std::time::Duration;

use reelist_core::{defaults, Error, Result};
use tracing::info;

/// Configuration shared by all HTTP collection sources.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL, without a trailing slash.
    pub base_url: String,
    /// Sent as `X-Api-Key` when set.
    pub api_key: Option<String>,
    /// Per-fetch timeout.
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::DEFAULT_BASE_URL.to_string(),
            api_key: None,
            timeout_secs: defaults::FETCH_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: trim_trailing_slash(base_url.into()),
            ..Self::default()
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Create from environment variables.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `REELIST_BASE_URL` | `http://localhost:5055` |
    /// | `REELIST_API_KEY` | (none) |
    /// | `REELIST_TIMEOUT_SECS` | 30 |
    pub fn from_env() -> Self {
        let base_url = std::env::var(defaults::ENV_BASE_URL)
            .unwrap_or_else(|_| defaults::DEFAULT_BASE_URL.to_string());
        let api_key = std::env::var(defaults::ENV_API_KEY).ok();
        let timeout_secs = std::env::var(defaults::ENV_TIMEOUT_SECS)
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(defaults::FETCH_TIMEOUT_SECS);

        info!(
            subsystem = "client",
            base_url = %base_url,
            api_key_set = api_key.is_some(),
            timeout_secs,
            "Initializing client configuration from environment"
        );

        Self {
            base_url: trim_trailing_slash(base_url),
            api_key,
            timeout_secs,
        }
    }

    /// Build the reqwest client for this configuration.
    pub fn build_http_client(&self) -> Result<reqwest::Client> {
        reqwest::Client::builder()
            .timeout(Duration::from_secs(self.timeout_secs))
            .build()
            .map_err(|e| Error::Config(format!("failed to build HTTP client: {}", e)))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn trim_trailing_slash(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}
