use std::str::FromStr;
use std::time::Duration;

/// Default backend endpoint for the product collection.
pub const DEFAULT_API_URL: &str = "http://localhost:3002/bp/products";

/// Default transport timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Repository adapter configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the product collection, without a trailing slash.
    pub api_url: String,
    /// Per-request timeout applied by the HTTP client.
    pub request_timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                        | Default                              |
    /// |--------------------------------|--------------------------------------|
    /// | `CATALOG_API_URL`              | `http://localhost:3002/bp/products`  |
    /// | `CATALOG_REQUEST_TIMEOUT_SECS` | `30`                                 |
    pub fn from_env() -> Self {
        let api_url = std::env::var("CATALOG_API_URL")
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let request_timeout_secs =
            env_or("CATALOG_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS);

        Self {
            api_url,
            request_timeout_secs,
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Read and parse an environment variable, falling back to `default` when it
/// is unset or malformed.
pub fn env_or<T: FromStr + Copy + std::fmt::Display>(key: &str, default: T) -> T {
    match std::env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, %default, "Malformed value, using default");
            default
        }),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_backend() {
        let config = ClientConfig::default();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn env_or_falls_back_on_missing_key() {
        assert_eq!(env_or("CATALOG_TEST_SURELY_UNSET_KEY", 7u64), 7);
    }
}
