use serde::Serialize;

use crate::{
    types::{EpisodeSummary, SeasonSummary},
    Error,
};

use super::{common::PageParams, PagedQuery, Query};

/// Lists the seasons of one show.
#[derive(Serialize, Clone, Debug)]
pub struct SeasonQuery {
    #[serde(skip)]
    pub show: String,
    #[serde(flatten)]
    pub common: PageParams,
}

impl SeasonQuery {
    pub fn new(show: &str) -> Self {
        Self {
            show: show.to_string(),
            common: PageParams::default(),
        }
    }
}

impl Query for SeasonQuery {
    fn path_segments(&self) -> Vec<String> {
        vec!["show".to_string(), self.show.clone(), "seasons".to_string()]
    }

    fn validate(&self) -> Result<(), Error> {
        if self.show.trim().is_empty() {
            return Err(Error::InvalidQuery("show is required".to_string()));
        }
        self.common.validate()
    }
}

impl PagedQuery for SeasonQuery {
    type Item = SeasonSummary;

    fn get_page_params(&mut self) -> &mut PageParams {
        &mut self.common
    }
}

/// Lists the episodes of one season of a show.
#[derive(Serialize, Clone, Debug)]
pub struct EpisodeQuery {
    #[serde(skip)]
    pub show: String,
    #[serde(skip)]
    pub season: i32,
    #[serde(flatten)]
    pub common: PageParams,
}

impl EpisodeQuery {
    pub fn new(show: &str, season: i32) -> Self {
        Self {
            show: show.to_string(),
            season,
            common: PageParams::default(),
        }
    }
}

impl Query for EpisodeQuery {
    fn path_segments(&self) -> Vec<String> {
        vec![
            "show".to_string(),
            self.show.clone(),
            "season".to_string(),
            self.season.to_string(),
            "episodes".to_string(),
        ]
    }

    fn validate(&self) -> Result<(), Error> {
        if self.show.trim().is_empty() {
            return Err(Error::InvalidQuery("show is required".to_string()));
        }
        self.common.validate()
    }
}

impl PagedQuery for EpisodeQuery {
    type Item = EpisodeSummary;

    fn get_page_params(&mut self) -> &mut PageParams {
        &mut self.common
    }
}
