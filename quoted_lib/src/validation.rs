use crate::config::PaginationDefaults;
use crate::error::QuotedError;
use crate::scope::QuotesScope;

pub const MAX_SEARCH_LENGTH: usize = 100;
pub const MAX_NAME_LENGTH: usize = 200;

/// Strip ASCII control characters (0x00-0x1F except space 0x20), trim whitespace,
/// and enforce a byte-length limit.
pub fn sanitize_text(input: &str, max_len: usize) -> Result<String, QuotedError> {
    if input.len() > max_len {
        return Err(QuotedError::InvalidInput(format!(
            "input exceeds maximum length of {} bytes",
            max_len
        )));
    }
    let sanitized: String = input
        .chars()
        .filter(|c| !c.is_ascii_control() || *c == ' ')
        .collect::<String>()
        .trim()
        .to_string();
    if sanitized.is_empty() {
        return Err(QuotedError::InvalidInput(
            "input is empty after sanitization".to_string(),
        ));
    }
    Ok(sanitized)
}

/// Validate a show-name search string.
pub fn validate_search(input: &str) -> Result<String, QuotedError> {
    sanitize_text(input, MAX_SEARCH_LENGTH)
}

/// Validate a show or character name used as an exact filter.
pub fn validate_name(input: &str) -> Result<String, QuotedError> {
    sanitize_text(input, MAX_NAME_LENGTH)
}

/// Season and episode numbers start at 1.
pub fn validate_number(label: &str, value: i32) -> Result<i32, QuotedError> {
    if value < 1 {
        return Err(QuotedError::InvalidInput(format!(
            "{} must be at least 1, got {}",
            label, value
        )));
    }
    Ok(value)
}

/// Page sizes are limited to the configured choices.
pub fn validate_page_size(size: u32, defaults: &PaginationDefaults) -> Result<u32, QuotedError> {
    if defaults.is_valid_page_size(size) {
        Ok(size)
    } else {
        Err(QuotedError::InvalidInput(format!(
            "page size must be one of {:?}, got {}",
            defaults.valid_page_sizes, size
        )))
    }
}

/// Parses a quotes filter from a query string such as
/// `showName=Futurama&seasonNo=6&episodeNo=2`.
///
/// Malformed fields are dropped rather than failing the whole filter: a
/// `seasonNo` that is not a positive number lists quotes across all seasons.
/// Unknown keys are ignored.
pub fn parse_quotes_filter(query: &str) -> QuotesScope {
    let mut scope = QuotesScope::default();
    let query = query.trim_start_matches('?');
    for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
        match key.as_ref() {
            "showName" => match validate_name(&value) {
                Ok(name) => scope.show_name = Some(name),
                Err(e) => tracing::warn!("Ignoring showName filter: {}", e),
            },
            "seasonNo" => scope.season_no = parse_number_filter("seasonNo", &value),
            "episodeNo" => scope.episode_no = parse_number_filter("episodeNo", &value),
            other => tracing::debug!("Ignoring unknown filter key '{}'", other),
        }
    }
    scope
}

fn parse_number_filter(label: &str, value: &str) -> Option<i32> {
    let Ok(n) = value.trim().parse::<i32>() else {
        tracing::warn!("Ignoring {} filter: '{}' is not a number", label, value);
        return None;
    };
    match validate_number(label, n) {
        Ok(n) => Some(n),
        Err(e) => {
            tracing::warn!("Ignoring {} filter: {}", label, e);
            None
        }
    }
}
