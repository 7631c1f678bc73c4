use catalog_client::config::env_or;
use catalog_client::ClientConfig;
use catalog_core::pagination::DEFAULT_ITEMS_PER_PAGE;

/// Catalog application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub client: ClientConfig,
    /// Rows per page of the listing.
    pub items_per_page: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            client: ClientConfig::default(),
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                        | Default                              |
    /// |--------------------------------|--------------------------------------|
    /// | `CATALOG_API_URL`              | `http://localhost:3002/bp/products`  |
    /// | `CATALOG_REQUEST_TIMEOUT_SECS` | `30`                                 |
    /// | `CATALOG_ITEMS_PER_PAGE`       | `5`                                  |
    pub fn from_env() -> Self {
        let mut items_per_page = env_or("CATALOG_ITEMS_PER_PAGE", DEFAULT_ITEMS_PER_PAGE);
        if items_per_page == 0 {
            tracing::warn!("CATALOG_ITEMS_PER_PAGE must be at least 1, using default");
            items_per_page = DEFAULT_ITEMS_PER_PAGE;
        }

        Self {
            client: ClientConfig::from_env(),
            items_per_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_five_rows() {
        let config = AppConfig::default();
        assert_eq!(config.items_per_page, 5);
        assert_eq!(config.client, ClientConfig::default());
    }
}
