pub mod casing;
mod client;
mod errors;
mod query;
pub mod types;
pub use self::casing::{Interceptor, KeyCaseInterceptor};
pub use self::client::Client;
pub use self::errors::Error;
pub use self::query::{
    EpisodeQuery, PageParams, PagedQuery, Query, QuoteQuery, RandomQuoteQuery, SeasonQuery,
    ShowQuery,
};
