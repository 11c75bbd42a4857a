//! Settings resolution shared with the browser settings layer.

use log::Level;

/// Backend used when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5001";

/// Picks the API base URL from `candidates` in priority order.
///
/// The first non-blank candidate wins; trailing slashes are stripped so
/// endpoint paths can be appended directly.
pub fn resolve_base_url<'a, I>(candidates: I) -> String
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    candidates
        .into_iter()
        .flatten()
        .map(|url| url.trim().trim_end_matches('/'))
        .find(|url| !url.is_empty())
        .unwrap_or(DEFAULT_API_BASE_URL)
        .to_string()
}

/// Parses a log level name, case-insensitively.
pub fn parse_log_level(raw: &str) -> Option<Level> {
    match raw.trim().to_lowercase().as_str() {
        "error" => Some(Level::Error),
        "warn" => Some(Level::Warn),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        "trace" => Some(Level::Trace),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_when_nothing_configured() {
        assert_eq!(resolve_base_url([None, None]), DEFAULT_API_BASE_URL);
        assert_eq!(resolve_base_url([Some("  "), Some("")]), DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_first_non_blank_wins() {
        let url = resolve_base_url([Some(" "), Some("https://admin.example.com"), Some("http://other")]);
        assert_eq!(url, "https://admin.example.com");
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        assert_eq!(resolve_base_url([Some("http://api:8080/")]), "http://api:8080");
        assert_eq!(resolve_base_url([Some("/")]), DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("DEBUG"), Some(Level::Debug));
        assert_eq!(parse_log_level(" warn "), Some(Level::Warn));
        assert_eq!(parse_log_level("verbose"), None);
    }
}
