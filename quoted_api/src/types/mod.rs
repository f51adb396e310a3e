mod page;
pub use self::page::{ErrorDetail, PagedResponse};

mod show;
pub use self::show::ShowSummary;

mod season;
pub use self::season::{EpisodeSummary, SeasonSummary};

mod quote;
pub use self::quote::{Quote, QuotePart};
