//! Library layer for Quoted: paginated list views over the catalogue API.
//!
//! Wraps the `quoted_api` client with a page/limit controller, a
//! descriptor-keyed query cache that ignores stale responses, configuration,
//! and input validation.

pub mod client;
pub mod config;
pub mod error;
pub mod paginated_query;
pub mod pagination;
pub mod query_cache;
pub mod scope;
pub mod validation;

pub use quoted_api;
pub use quoted_api::types;
pub use quoted_api::{PagedQuery, Query, RandomQuoteQuery};

pub use client::QuotedClient;
pub use config::{ApiConfig, AppConfig, Mode, PaginationDefaults};
pub use error::QuotedError;
pub use paginated_query::{
    InitialPageParams, PageOf, PageTicket, PaginatedQuery, QueryDescriptor,
};
pub use pagination::{visible_page_numbers, PageCursor, PaginationError, Paginator};
pub use query_cache::{Completion, QueryCache, QueryState, Ticket};
pub use scope::{EpisodesScope, QuotesScope, Scope, SeasonsScope, ShowsScope};
