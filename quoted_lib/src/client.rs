//! Configured entry point to the catalogue: builds the API client from
//! [`AppConfig`] and hands out paginated list views.

use quoted_api::types::Quote;
use quoted_api::{Client, RandomQuoteQuery};

use crate::config::AppConfig;
use crate::error::QuotedError;
use crate::paginated_query::{PageOf, PaginatedQuery};
use crate::query_cache::QueryState;
use crate::scope::Scope;

pub struct QuotedClient {
    inner: Client,
    config: AppConfig,
}

impl QuotedClient {
    /// Creates a client for the base URL selected by `config`.
    pub fn new(config: AppConfig) -> Result<Self, QuotedError> {
        let inner = Client::with_base_url(config.api.resolved_base_url())?;
        Ok(Self { inner, config })
    }

    /// Creates a client with a custom base URL. Used for testing.
    pub fn with_base_url(base_url: &str, config: AppConfig) -> Result<Self, QuotedError> {
        Ok(Self {
            inner: Client::with_base_url(base_url)?,
            config,
        })
    }

    pub fn api(&self) -> &Client {
        &self.inner
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// A list view over `scope`, starting from the configured defaults.
    pub fn paginate<S: Scope>(&self, scope: S) -> Result<PaginatedQuery<S>, QuotedError> {
        PaginatedQuery::new(
            scope,
            self.config.pagination.initial(),
            self.config.stale_time,
        )
    }

    /// Loads the current page of `query`, fetching only when its descriptor
    /// is not already cached or in flight.
    pub async fn load<S: Scope>(
        &self,
        query: &PaginatedQuery<S>,
    ) -> QueryState<PageOf<S>, quoted_api::Error> {
        query.load(&self.inner).await
    }

    /// Fetches a random quote. A season without a show, or an episode without
    /// a show and season, is rejected before any request is made.
    pub async fn random_quote(&self, query: &RandomQuoteQuery) -> Result<Quote, QuotedError> {
        Ok(self.inner.get_random_quote(query).await?)
    }
}
