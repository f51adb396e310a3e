//! Season and episode listings within a show.

use serde::{Deserialize, Serialize};

/// A season within a show.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SeasonSummary {
    /// The season number.
    pub season_no: i32,

    /// The name of the season, if one exists.
    #[serde(default)]
    pub season_name: Option<String>,

    #[serde(default)]
    pub quote_count: Option<u64>,
}

/// An episode within a season.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeSummary {
    /// The number of the episode within the season.
    pub episode_no: i32,

    /// Not all episodes have a name.
    #[serde(default)]
    pub episode_name: Option<String>,

    #[serde(default)]
    pub quote_count: Option<u64>,
}
