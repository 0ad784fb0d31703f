//! URL extraction and platform-specific normalization.
//!
//! Normalization never fails: any URL it cannot parse passes through
//! unchanged.

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

static URL_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)https?://\S+").unwrap());

/// Return the first HTTP(S) URL found in free text, if any.
pub fn extract_url(text: &str) -> Option<&str> {
    URL_PATTERN.find(text).map(|m| m.as_str())
}

/// Canonicalize known platform URL shapes.
///
/// LinkedIn activity-feed links (`/feed/update/urn:li:activity:<id>`) are
/// rewritten to the canonical `/feed/update/<id>` form; `/posts/` links and
/// everything else (including malformed URLs) pass through unchanged.
pub fn normalize_url(raw: &str) -> String {
    let Ok(parsed) = Url::parse(raw) else {
        return raw.to_string();
    };

    let path = parsed.path();
    if path.contains("/feed/update/urn:li:activity") {
        if let Some(activity_id) = path.rsplit(':').next().filter(|id| !id.is_empty()) {
            return format!("https://www.linkedin.com/feed/update/{activity_id}");
        }
    }

    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_first_url_from_text() {
        let text = "check this out https://example.com/a and https://example.com/b";
        assert_eq!(extract_url(text), Some("https://example.com/a"));
    }

    #[test]
    fn extract_is_case_insensitive_on_scheme() {
        assert_eq!(extract_url("HTTPS://Example.com"), Some("HTTPS://Example.com"));
    }

    #[test]
    fn no_url_yields_none() {
        assert_eq!(extract_url("just some words"), None);
        assert_eq!(extract_url(""), None);
    }

    #[test]
    fn rewrites_activity_feed_urls() {
        let url = "https://www.linkedin.com/feed/update/urn:li:activity:123456";
        assert_eq!(
            normalize_url(url),
            "https://www.linkedin.com/feed/update/123456"
        );
    }

    #[test]
    fn activity_rewrite_survives_mobile_host() {
        let url = "https://linkedin.com/feed/update/urn:li:activity:7000";
        assert_eq!(
            normalize_url(url),
            "https://www.linkedin.com/feed/update/7000"
        );
    }

    #[test]
    fn posts_urls_pass_through() {
        let url = "https://www.linkedin.com/posts/someone_topic-activity-123";
        assert_eq!(normalize_url(url), url);
    }

    #[test]
    fn non_linkedin_urls_pass_through() {
        let url = "https://example.com/feed/update/whatever";
        assert_eq!(normalize_url(url), url);
    }

    #[test]
    fn malformed_urls_pass_through() {
        assert_eq!(normalize_url("https://"), "https://");
        assert_eq!(normalize_url("not a url"), "not a url");
    }
}
