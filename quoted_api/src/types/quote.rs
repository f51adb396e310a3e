//! Quote types returned by `/quotes` and `/quote/random`.

use serde::{Deserialize, Serialize};

/// A quote, made of one or more parts spoken in `order`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub show_name: String,

    pub season_no: i32,

    #[serde(default)]
    pub season_name: Option<String>,

    pub episode_no: i32,

    #[serde(default)]
    pub episode_name: Option<String>,

    pub parts: Vec<QuotePart>,
}

/// One line of a quote.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuotePart {
    pub character_name: String,
    pub order: i32,
    pub quote_text: String,
}

impl Quote {
    /// Parts sorted by speaking order.
    pub fn ordered_parts(&self) -> Vec<&QuotePart> {
        let mut parts: Vec<&QuotePart> = self.parts.iter().collect();
        parts.sort_by_key(|p| p.order);
        parts
    }
}
