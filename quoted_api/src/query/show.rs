use serde::Serialize;

use crate::{types::ShowSummary, Error};

use super::{common::PageParams, PagedQuery, Query};

/// Lists shows, optionally filtered by name.
#[derive(Serialize, Default, Clone, Debug)]
pub struct ShowQuery {
    #[serde(flatten)]
    pub common: PageParams,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Query for ShowQuery {
    fn path_segments(&self) -> Vec<String> {
        vec!["shows".to_string()]
    }

    fn validate(&self) -> Result<(), Error> {
        self.common.validate()
    }
}

impl PagedQuery for ShowQuery {
    type Item = ShowSummary;

    fn get_page_params(&mut self) -> &mut PageParams {
        &mut self.common
    }
}

impl ShowQuery {
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }
}
