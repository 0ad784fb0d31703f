//! Deterministic classification — category, tags, and source label derived
//! from the URL string alone.
//!
//! Everything here is a pure function over ordered rule tables so it keeps
//! working when every network-dependent stage has failed.

use linkdrop_core::{Category, Classification};
use url::Url;

/// Fallback tag applied when no tag rule fires.
pub const UNLABELED_TAG: &str = "unlabeled";

struct CategoryRule {
    needles: &'static [&'static str],
    category: Category,
}

/// First match wins, top to bottom.
const CATEGORY_RULES: &[CategoryRule] = &[
    CategoryRule {
        needles: &["linkedin.com", "lnkd.in"],
        category: Category::LinkedInPosts,
    },
    CategoryRule {
        needles: &[
            "twitter.com",
            "x.com",
            "facebook.com",
            "tiktok.com",
            "instagram.com",
        ],
        category: Category::Social,
    },
    CategoryRule {
        needles: &["youtube.com", "youtu.be"],
        category: Category::Videos,
    },
    CategoryRule {
        needles: &["spotify.com", "podcasts.apple.com", "podcast"],
        category: Category::Podcasts,
    },
    CategoryRule {
        needles: &[
            "nytimes.com",
            "wsj.com",
            "bbc.com",
            "cnn.com",
            "bloomberg.com",
            "reuters.com",
        ],
        category: Category::NewsArticles,
    },
];

struct TagRule {
    needles: &'static [&'static str],
    tag: &'static str,
}

/// Tag rules are additive: every matching rule contributes its tag.
const TAG_RULES: &[TagRule] = &[
    TagRule { needles: &["youtube.com"], tag: "youtube" },
    TagRule { needles: &["spotify.com"], tag: "podcast" },
    TagRule { needles: &["twitter.com", "x.com"], tag: "twitter" },
    TagRule { needles: &["linkedin.com", "lnkd.in"], tag: "linkedin" },
];

/// Exact host → human-readable publisher label. Matches the host itself or
/// any subdomain of it.
const SOURCE_LABELS: &[(&str, &str)] = &[
    ("linkedin.com", "LinkedIn"),
    ("lnkd.in", "LinkedIn"),
    ("twitter.com", "X"),
    ("x.com", "X"),
    ("facebook.com", "Facebook"),
    ("tiktok.com", "TikTok"),
    ("instagram.com", "Instagram"),
    ("youtube.com", "YouTube"),
    ("youtu.be", "YouTube"),
    ("spotify.com", "Spotify"),
    ("podcasts.apple.com", "Apple Podcasts"),
    ("nytimes.com", "The New York Times"),
    ("wsj.com", "The Wall Street Journal"),
    ("bbc.com", "BBC"),
    ("cnn.com", "CNN"),
    ("bloomberg.com", "Bloomberg"),
    ("reuters.com", "Reuters"),
    ("github.com", "GitHub"),
];

/// Classify a URL into category, tags, and source label.
pub fn classify(url: &str) -> Classification {
    let lower = url.to_lowercase();

    let category = CATEGORY_RULES
        .iter()
        .find(|rule| rule.needles.iter().any(|n| lower.contains(n)))
        .map(|rule| rule.category)
        .unwrap_or(Category::Other);

    let mut tags: Vec<String> = TAG_RULES
        .iter()
        .filter(|rule| rule.needles.iter().any(|n| lower.contains(n)))
        .map(|rule| rule.tag.to_string())
        .collect();
    if tags.is_empty() {
        tags.push(UNLABELED_TAG.to_string());
    }

    Classification {
        category,
        tags,
        source: source_label(url),
    }
}

/// Fallback title used when neither the page nor the AI produced one.
pub fn heuristic_title(category: Category) -> &'static str {
    match category {
        Category::LinkedInPosts => "LinkedIn Post",
        Category::Social => "Twitter/X Post",
        Category::Videos => "YouTube Video",
        Category::Podcasts => "Podcast Episode",
        Category::NewsArticles => "News Article",
        Category::Screenshots => "Screenshot",
        Category::Other => "Saved Link",
    }
}

fn source_label(url: &str) -> String {
    let Some(host) = Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(|h| h.to_lowercase()))
    else {
        return "Unknown".to_string();
    };
    let host = host.strip_prefix("www.").unwrap_or(&host).to_string();

    for (known, label) in SOURCE_LABELS {
        if host == *known || host.ends_with(&format!(".{known}")) {
            return (*label).to_string();
        }
    }

    // Derive a label from the first DNS label: separators become spaces and
    // each word is capitalized ("hacker-news" -> "Hacker News").
    match host.split('.').next().filter(|label| !label.is_empty()) {
        Some(label) => label
            .split(['-', '_'])
            .filter(|word| !word.is_empty())
            .map(capitalize)
            .collect::<Vec<_>>()
            .join(" "),
        None => "Unknown".to_string(),
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn youtube_watch_url() {
        let c = classify("https://www.youtube.com/watch?v=abc");
        assert_eq!(c.category, Category::Videos);
        assert!(c.tags.contains(&"youtube".to_string()));
        assert_eq!(c.source, "YouTube");
    }

    #[test]
    fn unmatched_url_gets_fallbacks() {
        let c = classify("https://example.com");
        assert_eq!(c.category, Category::Other);
        assert_eq!(c.tags, vec![UNLABELED_TAG.to_string()]);
        assert_eq!(c.source, "Example");
    }

    #[test]
    fn linkedin_beats_social() {
        let c = classify("https://www.linkedin.com/posts/x.com-profile");
        assert_eq!(c.category, Category::LinkedInPosts);
        assert!(c.tags.contains(&"linkedin".to_string()));
        assert_eq!(c.source, "LinkedIn");
    }

    #[test]
    fn shortened_linkedin_host() {
        let c = classify("https://lnkd.in/abc123");
        assert_eq!(c.category, Category::LinkedInPosts);
        assert_eq!(c.source, "LinkedIn");
    }

    #[test]
    fn spotify_episode_is_podcast() {
        let c = classify("https://open.spotify.com/episode/xyz");
        assert_eq!(c.category, Category::Podcasts);
        assert!(c.tags.contains(&"podcast".to_string()));
        assert_eq!(c.source, "Spotify");
    }

    #[test]
    fn podcast_substring_alone_matches() {
        let c = classify("https://somehost.fm/podcast/42");
        assert_eq!(c.category, Category::Podcasts);
        // No tag rule fires on the bare substring.
        assert_eq!(c.tags, vec![UNLABELED_TAG.to_string()]);
    }

    #[test]
    fn tags_are_additive() {
        let c = classify("https://x.com/user/status/1?ref=linkedin.com");
        assert!(c.tags.contains(&"twitter".to_string()));
        assert!(c.tags.contains(&"linkedin".to_string()));
    }

    #[test]
    fn news_outlets() {
        for url in [
            "https://www.nytimes.com/2026/01/01/tech/story.html",
            "https://www.reuters.com/world/article",
            "https://www.bbc.com/news/article",
        ] {
            assert_eq!(classify(url).category, Category::NewsArticles, "{url}");
        }
    }

    #[test]
    fn hyphenated_host_label_is_capitalized() {
        let c = classify("https://hacker-news.example.org/item");
        assert_eq!(c.source, "Hacker News");
    }

    #[test]
    fn unparsable_url_source_is_unknown() {
        let c = classify("not-a-url");
        assert_eq!(c.source, "Unknown");
        assert_eq!(c.category, Category::Other);
    }

    #[test]
    fn heuristic_titles_per_category() {
        assert_eq!(heuristic_title(Category::LinkedInPosts), "LinkedIn Post");
        assert_eq!(heuristic_title(Category::Videos), "YouTube Video");
        assert_eq!(heuristic_title(Category::Other), "Saved Link");
    }
}
