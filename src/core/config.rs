//! API client configuration.
//!
//! Native builds load it with `ApiConfig::from_env()` after calling
//! `dotenvy::dotenv()`. Browser builds use `ApiConfig::load()`, which reads the
//! base URL baked in at compile time. Configuration values are public; do not
//! store secrets here.

use std::time::Duration;

/// Remote user-management API used when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

/// Configuration for talking to the remote auth API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL of the remote API, without the `/api/...` path
    /// Example: https://api.cognify.dev
    pub api_base_url: String,

    /// Optional per-request timeout. `None` waits for the request to settle.
    pub request_timeout: Option<Duration>,
}

impl ApiConfig {
    /// Builds a config for an explicit base URL with no timeout.
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            request_timeout: None,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    #[cfg(feature = "ssr")]
    pub fn from_env() -> Self {
        Self::from_values(
            std::env::var("COGNIFY_API_BASE_URL").ok().as_deref(),
            std::env::var("COGNIFY_API_TIMEOUT_SECS").ok().as_deref(),
        )
    }

    /// Loads the base URL baked in at build time.
    pub fn load() -> Self {
        Self::from_values(option_env!("COGNIFY_API_BASE_URL"), None)
    }

    fn from_values(base_url: Option<&str>, timeout_secs: Option<&str>) -> Self {
        let api_base_url = base_url
            .and_then(normalize_value)
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        let request_timeout = timeout_secs
            .and_then(normalize_value)
            .and_then(|value| value.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs);

        Self {
            api_base_url,
            request_timeout,
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

/// Builds a URL from an explicit base URL and the provided path.
pub fn build_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

fn normalize_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
