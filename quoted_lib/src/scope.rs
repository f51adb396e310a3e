//! The semantic filter of each list view. A scope plus page and limit forms a
//! [`crate::QueryDescriptor`].

use std::fmt::Debug;
use std::hash::Hash;

use quoted_api::{EpisodeQuery, PageParams, PagedQuery, QuoteQuery, SeasonQuery, ShowQuery};

/// Filter fields for one kind of list, convertible into the API query for a page.
pub trait Scope: Clone + Eq + Hash + Debug {
    type Query: PagedQuery;

    fn to_query(&self, page: PageParams) -> Self::Query;
}

/// All shows, optionally narrowed by a name search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ShowsScope {
    pub name: Option<String>,
}

impl Scope for ShowsScope {
    type Query = ShowQuery;

    fn to_query(&self, page: PageParams) -> ShowQuery {
        ShowQuery {
            common: page,
            name: self.name.clone(),
        }
    }
}

/// The seasons of one show.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SeasonsScope {
    pub show: String,
}

impl Scope for SeasonsScope {
    type Query = SeasonQuery;

    fn to_query(&self, page: PageParams) -> SeasonQuery {
        SeasonQuery {
            show: self.show.clone(),
            common: page,
        }
    }
}

/// The episodes of one season.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EpisodesScope {
    pub show: String,
    pub season: i32,
}

impl Scope for EpisodesScope {
    type Query = EpisodeQuery;

    fn to_query(&self, page: PageParams) -> EpisodeQuery {
        EpisodeQuery {
            show: self.show.clone(),
            season: self.season,
            common: page,
        }
    }
}

/// Quotes, optionally narrowed to a show, season and episode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct QuotesScope {
    pub show_name: Option<String>,
    pub season_no: Option<i32>,
    pub episode_no: Option<i32>,
}

impl Scope for QuotesScope {
    type Query = QuoteQuery;

    fn to_query(&self, page: PageParams) -> QuoteQuery {
        QuoteQuery {
            common: page,
            show_name: self.show_name.clone(),
            season_no: self.season_no,
            episode_no: self.episode_no,
        }
    }
}
