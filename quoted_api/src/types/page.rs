use serde::{Deserialize, Deserializer, Serialize};

/// One page of a list endpoint. The API reports no total count, only whether
/// another page exists.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PagedResponse<T> {
    pub page: u32,
    pub limit: u32,
    #[serde(deserialize_with = "bool_or_number")]
    pub has_more: bool,
    pub data: Vec<T>,
}

/// Error payload returned alongside non-success statuses.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorDetail {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub key: Option<String>,
}

/// `hasMore` is a boolean from the API but has been sent as `0`/`1`.
fn bool_or_number<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Number(f64),
    }

    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => b,
        Flag::Number(n) => n != 0.0,
    })
}
