//! Key-case conversion between the application's camelCase models and the
//! API's snake_case wire payloads.
//!
//! The conversion walks any [`serde_json::Value`], renaming mapping keys and
//! recursing into arrays and nested mappings. Leaf values are never touched.

use serde_json::{Map, Value};

/// Renames every mapping key from camelCase to snake_case, e.g. `seasonNo` to `season_no`.
pub fn to_wire_case(value: Value) -> Value {
    transform_keys(value, &camel_to_snake)
}

/// Renames every mapping key from snake_case to camelCase, e.g. `season_no` to `seasonNo`.
pub fn to_app_case(value: Value) -> Value {
    transform_keys(value, &snake_to_camel)
}

fn transform_keys(value: Value, rename: &dyn Fn(&str) -> String) -> Value {
    match value {
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| transform_keys(item, rename))
                .collect(),
        ),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (rename(&key), transform_keys(value, rename)))
                .collect::<Map<String, Value>>(),
        ),
        leaf => leaf,
    }
}

/// `quoteText` -> `quote_text`. Only ASCII upper-case letters start a new word.
pub fn camel_to_snake(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            out.push('_');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// `has_more` -> `hasMore`. An underscore followed by a word character
/// (`[A-Za-z0-9_]`) collapses into that character upper-cased; a trailing
/// underscore is left alone.
pub fn snake_to_camel(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut chars = key.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '_' {
            if let Some(&next) = chars.peek() {
                if next.is_ascii_alphanumeric() || next == '_' {
                    out.push(next.to_ascii_uppercase());
                    chars.next();
                    continue;
                }
            }
        }
        out.push(c);
    }
    out
}

/// Hook run by [`crate::Client`] on every outgoing query, every successful
/// response body and every error response body.
pub trait Interceptor: Send + Sync {
    fn request(&self, params: Value) -> Value;
    fn response(&self, body: Value) -> Value;
    fn error(&self, body: Value) -> Value;
}

/// The default interceptor: camelCase out, snake_case on the wire, camelCase back.
#[derive(Debug, Default, Clone, Copy)]
pub struct KeyCaseInterceptor;

impl Interceptor for KeyCaseInterceptor {
    fn request(&self, params: Value) -> Value {
        to_wire_case(params)
    }

    fn response(&self, body: Value) -> Value {
        to_app_case(body)
    }

    fn error(&self, body: Value) -> Value {
        to_app_case(body)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn camel_to_snake_keys() {
        assert_eq!(camel_to_snake("seasonNo"), "season_no");
        assert_eq!(camel_to_snake("characterName"), "character_name");
        assert_eq!(camel_to_snake("page"), "page");
        assert_eq!(camel_to_snake("ABC"), "_a_b_c");
    }

    #[test]
    fn snake_to_camel_keys() {
        assert_eq!(snake_to_camel("season_no"), "seasonNo");
        assert_eq!(snake_to_camel("has_more"), "hasMore");
        assert_eq!(snake_to_camel("episode_2"), "episode2");
        assert_eq!(snake_to_camel("trailing_"), "trailing_");
        assert_eq!(snake_to_camel("a__b"), "a_b");
    }

    #[test]
    fn to_wire_case_nested() {
        let value = json!({
            "seasonNo": 3,
            "parts": [{"quoteText": "hi", "characterName": "A"}]
        });
        assert_eq!(
            to_wire_case(value),
            json!({
                "season_no": 3,
                "parts": [{"quote_text": "hi", "character_name": "A"}]
            })
        );
    }

    #[test]
    fn to_app_case_paged_body() {
        assert_eq!(
            to_app_case(json!({"has_more": 1, "data": []})),
            json!({"hasMore": 1, "data": []})
        );
    }

    #[test]
    fn leaves_pass_through() {
        for leaf in [
            json!(null),
            json!(true),
            json!(42),
            json!(-1.5),
            json!("season_no"),
        ] {
            assert_eq!(to_app_case(leaf.clone()), leaf);
            assert_eq!(to_wire_case(leaf.clone()), leaf);
        }
    }

    #[test]
    fn string_values_keep_their_case() {
        let value = json!({"showName": "someShow_name"});
        assert_eq!(
            to_wire_case(value),
            json!({"show_name": "someShow_name"})
        );
    }

    #[test]
    fn arrays_keep_order_and_length() {
        let value = json!([{"a_b": 1}, 2, [{"c_d": null}], "x"]);
        assert_eq!(
            to_app_case(value),
            json!([{"aB": 1}, 2, [{"cD": null}], "x"])
        );
    }

    #[test]
    fn round_trip_camel() {
        let app = json!({
            "showName": "Futurama",
            "seasonNo": 6,
            "episodeName": null,
            "parts": [
                {"characterName": "Fry", "order": 1, "quoteText": "..."},
                {"characterName": "Bender", "order": 2, "quoteText": "..."}
            ]
        });
        assert_eq!(to_app_case(to_wire_case(app.clone())), app);
    }

    #[test]
    fn round_trip_snake() {
        let wire = json!({"has_more": false, "data": [{"quote_count": 12, "name": "x"}]});
        assert_eq!(to_wire_case(to_app_case(wire.clone())), wire);
    }

    #[test]
    fn deep_nesting() {
        let mut value = json!({"leaf_value": 1});
        for _ in 0..200 {
            value = json!({"nested_level": [value]});
        }
        let mut out = to_app_case(value);
        for _ in 0..200 {
            out = out["nestedLevel"][0].take();
        }
        assert_eq!(out, json!({"leafValue": 1}));
    }

    #[test]
    fn interceptor_directions() {
        let interceptor = KeyCaseInterceptor;
        assert_eq!(
            interceptor.request(json!({"showName": "x"})),
            json!({"show_name": "x"})
        );
        assert_eq!(
            interceptor.response(json!({"show_name": "x"})),
            json!({"showName": "x"})
        );
        assert_eq!(
            interceptor.error(json!({"message": "m", "error_key": "k"})),
            json!({"message": "m", "errorKey": "k"})
        );
    }
}
