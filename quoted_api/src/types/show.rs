use serde::{Deserialize, Serialize};

/// A show as listed by `/shows`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShowSummary {
    pub name: String,

    /// Number of quotes recorded for the show. Older deployments omit it.
    #[serde(default)]
    pub quote_count: Option<u64>,
}
