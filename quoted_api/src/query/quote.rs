use serde::Serialize;

use crate::{types::Quote, Error};

use super::{common::PageParams, PagedQuery, Query};

/// Lists quotes, optionally narrowed to a show, season and episode.
#[derive(Serialize, Default, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct QuoteQuery {
    #[serde(flatten)]
    pub common: PageParams,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season_no: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub episode_no: Option<i32>,
}

impl Query for QuoteQuery {
    fn path_segments(&self) -> Vec<String> {
        vec!["quotes".to_string()]
    }

    fn validate(&self) -> Result<(), Error> {
        self.common.validate()
    }
}

impl PagedQuery for QuoteQuery {
    type Item = Quote;

    fn get_page_params(&mut self) -> &mut PageParams {
        &mut self.common
    }
}

impl QuoteQuery {
    pub fn with_show_name(mut self, show_name: &str) -> Self {
        self.show_name = Some(show_name.to_string());
        self
    }

    pub fn with_season_no(mut self, season_no: i32) -> Self {
        self.season_no = Some(season_no);
        self
    }

    pub fn with_episode_no(mut self, episode_no: i32) -> Self {
        self.episode_no = Some(episode_no);
        self
    }
}

/// Fetches one random quote.
///
/// Any filter may be omitted, but a season only makes sense within a show and
/// an episode only within a season, so [`Query::validate`] rejects a season
/// without a show and an episode without both.
#[derive(Serialize, Default, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RandomQuoteQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season_no: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub episode_no: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub character_name: Option<String>,
}

impl Query for RandomQuoteQuery {
    fn path_segments(&self) -> Vec<String> {
        vec!["quote".to_string(), "random".to_string()]
    }

    fn validate(&self) -> Result<(), Error> {
        if self.season_no.is_some() && self.show_name.is_none() {
            return Err(Error::InvalidQuery(
                "a season can only be given together with a show".to_string(),
            ));
        }
        if self.episode_no.is_some() && (self.show_name.is_none() || self.season_no.is_none()) {
            return Err(Error::InvalidQuery(
                "an episode can only be given together with a show and season".to_string(),
            ));
        }
        Ok(())
    }
}

impl RandomQuoteQuery {
    pub fn with_show_name(mut self, show_name: &str) -> Self {
        self.show_name = Some(show_name.to_string());
        self
    }

    pub fn with_season_no(mut self, season_no: i32) -> Self {
        self.season_no = Some(season_no);
        self
    }

    pub fn with_episode_no(mut self, episode_no: i32) -> Self {
        self.episode_no = Some(episode_no);
        self
    }

    pub fn with_character_name(mut self, character_name: &str) -> Self {
        self.character_name = Some(character_name.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::query::{PagedQuery, Query, QuoteQuery, RandomQuoteQuery};

    #[test]
    fn test_quote_query_params_are_camel_case() {
        let q = QuoteQuery::default()
            .with_show_name("Futurama")
            .with_season_no(6)
            .with_episode_no(2)
            .with_page(2);
        assert_eq!(
            q.params().unwrap(),
            json!({"page": 2, "limit": 10, "showName": "Futurama", "seasonNo": 6, "episodeNo": 2})
        );
    }

    #[test]
    fn test_random_quote_hierarchy() {
        assert!(RandomQuoteQuery::default().validate().is_ok());
        assert!(RandomQuoteQuery::default()
            .with_character_name("Bender")
            .validate()
            .is_ok());
        assert!(RandomQuoteQuery::default()
            .with_show_name("Futurama")
            .with_season_no(1)
            .with_episode_no(1)
            .with_character_name("Fry")
            .validate()
            .is_ok());
        assert!(RandomQuoteQuery::default()
            .with_season_no(1)
            .validate()
            .is_err());
        assert!(RandomQuoteQuery::default()
            .with_show_name("Futurama")
            .with_episode_no(1)
            .validate()
            .is_err());
    }
}
