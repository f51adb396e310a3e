//! Application configuration, read from the environment once at startup and
//! passed down from the composition root.

use std::time::Duration;

use quoted_api::Client;

use crate::error::QuotedError;
use crate::paginated_query::InitialPageParams;
use crate::query_cache::DEFAULT_STALE_TIME;

/// Local development server the API is proxied through.
pub const DEFAULT_DEV_BASE_URL: &str = "http://localhost:3000/api";

/// Which API base URL to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    Development,
    #[default]
    Production,
}

impl std::str::FromStr for Mode {
    type Err = QuotedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Ok(Mode::Development),
            "production" | "prod" => Ok(Mode::Production),
            other => Err(QuotedError::Config(format!(
                "unknown mode '{}', expected development or production",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub mode: Mode,
    /// Absolute base URL used in production.
    pub base_url: String,
    /// Proxy base URL used in development.
    pub dev_base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Production,
            base_url: Client::DEFAULT_BASE_URL.to_string(),
            dev_base_url: DEFAULT_DEV_BASE_URL.to_string(),
        }
    }
}

impl ApiConfig {
    /// The base URL for the configured mode.
    pub fn resolved_base_url(&self) -> &str {
        match self.mode {
            Mode::Development => &self.dev_base_url,
            Mode::Production => &self.base_url,
        }
    }
}

/// Page-size choices and page-strip width for list views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationDefaults {
    pub page_size: u32,
    pub valid_page_sizes: Vec<u32>,
    pub max_page_numbers_displayed: u32,
}

impl Default for PaginationDefaults {
    fn default() -> Self {
        Self {
            page_size: 10,
            valid_page_sizes: vec![10, 20, 50],
            max_page_numbers_displayed: 5,
        }
    }
}

impl PaginationDefaults {
    /// Starting cursor for a fresh list view.
    pub fn initial(&self) -> InitialPageParams {
        InitialPageParams {
            initial_page: 1,
            initial_limit: self.page_size,
        }
    }

    pub fn is_valid_page_size(&self, size: u32) -> bool {
        self.valid_page_sizes.contains(&size)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub pagination: PaginationDefaults,
    /// How long a fetched page is served without refetching.
    pub stale_time: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            pagination: PaginationDefaults::default(),
            stale_time: DEFAULT_STALE_TIME,
        }
    }
}

impl AppConfig {
    /// Reads `QUOTED_MODE`, `QUOTED_BASE_URL`, `QUOTED_DEV_BASE_URL`,
    /// `QUOTED_PAGE_SIZE` and `QUOTED_STALE_SECS`. Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, QuotedError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, QuotedError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = AppConfig::default();

        if let Some(mode) = lookup("QUOTED_MODE") {
            config.api.mode = mode.parse()?;
        }
        if let Some(url) = lookup("QUOTED_BASE_URL") {
            config.api.base_url = url;
        }
        if let Some(url) = lookup("QUOTED_DEV_BASE_URL") {
            config.api.dev_base_url = url;
        }
        if let Some(size) = lookup("QUOTED_PAGE_SIZE") {
            let size = size
                .trim()
                .parse::<u32>()
                .map_err(|_| QuotedError::Config(format!("invalid QUOTED_PAGE_SIZE '{}'", size)))?;
            if !config.pagination.is_valid_page_size(size) {
                return Err(QuotedError::Config(format!(
                    "QUOTED_PAGE_SIZE must be one of {:?}",
                    config.pagination.valid_page_sizes
                )));
            }
            config.pagination.page_size = size;
        }
        config.stale_time = lookup("QUOTED_STALE_SECS")
            .and_then(|val| val.trim().parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_STALE_TIME);

        tracing::debug!(
            "Using {:?} API at {}",
            config.api.mode,
            config.api.resolved_base_url()
        );
        Ok(config)
    }
}
