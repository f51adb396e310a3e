//! HTTP client for the Quoted catalogue API.

use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::{
    casing::{Interceptor, KeyCaseInterceptor},
    query::{
        append_params, EpisodeQuery, PagedQuery, Query, QuoteQuery, RandomQuoteQuery, SeasonQuery,
        ShowQuery,
    },
    types::{EpisodeSummary, ErrorDetail, PagedResponse, Quote, SeasonSummary, ShowSummary},
    Error,
};

/// Request timeout for API calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the Quoted catalogue API.
///
/// Every request goes through a single funnel that hands the query parameters,
/// the response body and any error body to the installed [`Interceptor`]. The
/// default [`KeyCaseInterceptor`] keeps the API's snake_case keys out of
/// application code.
pub struct Client {
    /// Base URL for the API, e.g. `https://quoted-delta.vercel.app/api`.
    base_api_url: String,
    http: reqwest::Client,
    interceptor: Arc<dyn Interceptor>,
}

impl Client {
    /// The deployed API.
    pub const DEFAULT_BASE_URL: &'static str = "https://quoted-delta.vercel.app/api";

    /// Creates a new client pointing at the deployed API.
    pub fn new() -> Result<Self, Error> {
        Self::with_base_url(Self::DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (a local proxy, or wiremock in tests).
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        Ok(Self {
            base_api_url: base_url.trim_end_matches('/').to_string(),
            http,
            interceptor: Arc::new(KeyCaseInterceptor),
        })
    }

    /// Replaces the interceptor run on every request and response.
    pub fn with_interceptor(mut self, interceptor: impl Interceptor + 'static) -> Self {
        self.interceptor = Arc::new(interceptor);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }

    fn get_url(&self, query: &impl Query) -> Result<Url, Error> {
        let mut url = Url::parse(&self.base_api_url).map_err(|e| {
            tracing::error!("Invalid base URL {}: {}", self.base_api_url, e);
            Error::RequestFailed
        })?;
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                tracing::error!("Base URL cannot carry a path: {}", self.base_api_url);
                Error::RequestFailed
            })?;
            segments.pop_if_empty().extend(query.path_segments());
        }
        let params = self.interceptor.request(query.params()?);
        Ok(append_params(&url, &params))
    }

    async fn get<T, Q>(&self, query: &Q) -> Result<T, Error>
    where
        T: DeserializeOwned,
        Q: Query,
    {
        query.validate()?;
        let url = self.get_url(query)?;
        tracing::debug!("GET {}", url);

        let resp = self
            .http
            .get(url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get resource: {}", e);
                Error::RequestFailed
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            let detail = serde_json::from_str::<Value>(&body)
                .ok()
                .map(|v| self.interceptor.error(v))
                .and_then(|v| serde_json::from_value::<ErrorDetail>(v).ok());
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                detail,
                body: snippet,
            });
        }

        let raw = serde_json::from_str::<Value>(&body).map_err(|e| {
            tracing::error!("Response is not JSON: {} | body: {}", e, truncate_body(&body));
            Error::RequestFailed
        })?;
        let parsed = serde_json::from_value::<T>(self.interceptor.response(raw)).map_err(|e| {
            tracing::error!(
                "Failed to parse resource: {} | body: {}",
                e,
                truncate_body(&body)
            );
            Error::RequestFailed
        })?;

        Ok(parsed)
    }

    /// Fetches one page of any list endpoint.
    pub async fn get_page<Q: PagedQuery>(
        &self,
        query: &Q,
    ) -> Result<PagedResponse<Q::Item>, Error> {
        self.get::<PagedResponse<Q::Item>, Q>(query).await
    }

    /// Fetches a page of shows.
    pub async fn get_shows(&self, query: &ShowQuery) -> Result<PagedResponse<ShowSummary>, Error> {
        self.get_page(query).await
    }

    /// Fetches a page of seasons for one show.
    pub async fn get_seasons(
        &self,
        query: &SeasonQuery,
    ) -> Result<PagedResponse<SeasonSummary>, Error> {
        self.get_page(query).await
    }

    /// Fetches a page of episodes for one season.
    pub async fn get_episodes(
        &self,
        query: &EpisodeQuery,
    ) -> Result<PagedResponse<EpisodeSummary>, Error> {
        self.get_page(query).await
    }

    /// Fetches a page of quotes.
    pub async fn get_quotes(&self, query: &QuoteQuery) -> Result<PagedResponse<Quote>, Error> {
        self.get_page(query).await
    }

    /// Fetches a random quote matching the filters.
    pub async fn get_random_quote(&self, query: &RandomQuoteQuery) -> Result<Quote, Error> {
        self.get::<Quote, RandomQuoteQuery>(query).await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
