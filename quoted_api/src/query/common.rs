//! Shared query infrastructure: the [`Query`] and [`PagedQuery`] traits,
//! [`PageParams`], and URL parameter encoding.

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use url::Url;

use crate::Error;

/// Trait implemented by all query builders.
///
/// Queries serialize their parameters with application (camelCase) keys; the
/// client's interceptor converts them to wire case before they reach the URL.
/// Path-only fields are marked `#[serde(skip)]` and returned from
/// [`Query::path_segments`] instead.
pub trait Query: Serialize {
    /// Path segments appended to the base URL, unencoded.
    fn path_segments(&self) -> Vec<String>;

    /// Checks the query before it is sent.
    fn validate(&self) -> Result<(), Error> {
        Ok(())
    }

    /// Query parameters in application key case.
    fn params(&self) -> Result<Value, Error> {
        serde_json::to_value(self).map_err(|e| {
            tracing::error!("Failed to serialize query parameters: {}", e);
            Error::InvalidQuery(e.to_string())
        })
    }
}

/// A query against a list endpoint, paged by `page` and `limit`.
pub trait PagedQuery: Query {
    /// The list item type, returned inside a [`crate::types::PagedResponse`].
    type Item: DeserializeOwned;

    /// Returns a mutable reference to the paging fields.
    fn get_page_params(&mut self) -> &mut PageParams;

    /// Sets the page number (1-indexed).
    fn with_page(mut self, page: u32) -> Self
    where
        Self: Sized,
    {
        self.get_page_params().page = page;
        self
    }

    /// Sets the number of results per page.
    fn with_limit(mut self, limit: u32) -> Self
    where
        Self: Sized,
    {
        self.get_page_params().limit = limit;
        self
    }
}

/// Paging fields shared by every list query.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageParams {
    /// Page number (1-indexed). Defaults to 1.
    pub page: u32,
    /// Results per page. Defaults to 10.
    pub limit: u32,
}

impl Default for PageParams {
    fn default() -> PageParams {
        PageParams { page: 1, limit: 10 }
    }
}

impl PageParams {
    pub fn new(page: u32, limit: u32) -> Self {
        Self { page, limit }
    }

    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.page == 0 {
            return Err(Error::InvalidQuery("page must be at least 1".to_string()));
        }
        if self.limit == 0 {
            return Err(Error::InvalidQuery("limit must be at least 1".to_string()));
        }
        Ok(())
    }
}

/// Appends each entry of a parameter mapping to the URL. Nulls are skipped and
/// arrays become repeated pairs.
pub fn append_params(url: &Url, params: &Value) -> Url {
    let mut url = url.clone();
    if let Value::Object(map) = params {
        for (key, value) in map {
            match value {
                Value::Null => {}
                Value::Array(items) => {
                    for item in items {
                        if let Some(s) = param_string(item) {
                            url.query_pairs_mut().append_pair(key, &s);
                        }
                    }
                }
                other => {
                    if let Some(s) = param_string(other) {
                        url.query_pairs_mut().append_pair(key, &s);
                    }
                }
            }
        }
    }
    url
}

fn param_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        nested => Some(nested.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn append_params_skips_nulls() {
        let url = Url::parse("https://example.com/quotes").unwrap();
        let out = append_params(&url, &json!({"page": 1, "show_name": null}));
        insta::assert_snapshot!(out.to_string(), @"https://example.com/quotes?page=1");
    }

    #[test]
    fn append_params_repeats_arrays() {
        let url = Url::parse("https://example.com/").unwrap();
        let out = append_params(&url, &json!({"id": [1, 2], "flag": true}));
        assert_eq!(
            out.query_pairs().collect::<Vec<_>>().len(),
            3,
            "two ids and one flag"
        );
    }

    #[test]
    fn append_params_encodes_values() {
        let url = Url::parse("https://example.com/").unwrap();
        let out = append_params(&url, &json!({"name": "Family Guy & co"}));
        insta::assert_snapshot!(out.to_string(), @"https://example.com/?name=Family+Guy+%26+co");
    }

    #[test]
    fn page_params_validation() {
        assert!(PageParams::new(1, 10).validate().is_ok());
        assert!(PageParams::new(0, 10).validate().is_err());
        assert!(PageParams::new(1, 0).validate().is_err());
    }
}
