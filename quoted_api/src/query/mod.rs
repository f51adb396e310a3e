mod common;
pub use self::common::{append_params, PageParams, PagedQuery, Query};

mod show;
pub use self::show::ShowQuery;

mod season;
pub use self::season::{EpisodeQuery, SeasonQuery};

mod quote;
pub use self::quote::{QuoteQuery, RandomQuoteQuery};
