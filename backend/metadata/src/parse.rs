//! Selector-chain extraction of page metadata from an HTML document.
//!
//! Pure functions over the HTML string: every field is resolved by trying an
//! ordered list of selectors and taking the first non-empty trimmed result,
//! degrading to `None` independently.

use linkdrop_core::PageMetadata;
use scraper::{ElementRef, Html, Selector};

/// One step in a fallback chain: a CSS selector plus the attribute to read
/// (element text when `attr` is `None`).
struct Probe {
    css: &'static str,
    attr: Option<&'static str>,
}

const TITLE_CHAIN: &[Probe] = &[
    Probe { css: "title", attr: None },
    Probe { css: r#"meta[property="og:title"]"#, attr: Some("content") },
    Probe { css: r#"meta[name="twitter:title"]"#, attr: Some("content") },
];

const DESCRIPTION_CHAIN: &[Probe] = &[
    Probe { css: r#"meta[name="description"]"#, attr: Some("content") },
    Probe { css: r#"meta[property="og:description"]"#, attr: Some("content") },
    Probe { css: r#"meta[name="twitter:description"]"#, attr: Some("content") },
];

const AUTHOR_CHAIN: &[Probe] = &[
    Probe { css: r#"meta[name="author"]"#, attr: Some("content") },
    Probe { css: r#"meta[property="article:author"]"#, attr: Some("content") },
    Probe { css: r#"meta[name="twitter:creator"]"#, attr: Some("content") },
];

const PUBLISHED_CHAIN: &[Probe] = &[
    Probe { css: r#"meta[property="article:published_time"]"#, attr: Some("content") },
    Probe { css: r#"meta[name="date"]"#, attr: Some("content") },
    Probe { css: "time[datetime]", attr: Some("datetime") },
];

const SITE_NAME_CHAIN: &[Probe] = &[
    Probe { css: r#"meta[property="og:site_name"]"#, attr: Some("content") },
    Probe { css: r#"meta[name="application-name"]"#, attr: Some("content") },
];

/// Content containers tried in priority order for the article excerpt.
const CONTENT_CONTAINERS: &[&str] = &[
    "article",
    r#"[role="article"]"#,
    ".post-content",
    ".article-content",
    ".entry-content",
    ".content",
    "main",
];

/// Paragraphs shorter than this are noise (nav items, bylines, captions).
const MIN_PARAGRAPH_CHARS: usize = 50;
const MAX_CONTAINER_PARAGRAPHS: usize = 5;
const MAX_FALLBACK_PARAGRAPHS: usize = 3;
const MAX_EXCERPT_WORDS: usize = 500;
const MAX_EXCERPT_CHARS: usize = 2000;

/// Extract all metadata fields from an HTML document.
pub fn parse_metadata(html: &str) -> PageMetadata {
    let doc = Html::parse_document(html);
    PageMetadata {
        title: first_match(&doc, TITLE_CHAIN),
        description: first_match(&doc, DESCRIPTION_CHAIN),
        author: first_match(&doc, AUTHOR_CHAIN),
        published: first_match(&doc, PUBLISHED_CHAIN),
        site_name: first_match(&doc, SITE_NAME_CHAIN),
        excerpt: extract_excerpt(&doc),
    }
}

fn first_match(doc: &Html, chain: &[Probe]) -> Option<String> {
    for probe in chain {
        let Ok(selector) = Selector::parse(probe.css) else {
            continue;
        };
        let Some(element) = doc.select(&selector).next() else {
            continue;
        };
        let value = match probe.attr {
            Some(attr) => element.value().attr(attr).map(str::to_string),
            None => Some(element.text().collect::<String>()),
        };
        if let Some(value) = value {
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                return Some(trimmed.to_string());
            }
        }
    }
    None
}

/// Pull a readable excerpt out of the document body.
///
/// Tries each known content container in order; the first one holding
/// qualifying paragraphs contributes up to five of them. When no container
/// yields text, falls back to the first three qualifying paragraphs anywhere
/// in the document.
fn extract_excerpt(doc: &Html) -> Option<String> {
    let Ok(paragraph) = Selector::parse("p") else {
        return None;
    };

    for css in CONTENT_CONTAINERS {
        let Ok(selector) = Selector::parse(css) else {
            continue;
        };
        if let Some(container) = doc.select(&selector).next() {
            let paragraphs = qualifying_paragraphs(
                container.select(&paragraph),
                MAX_CONTAINER_PARAGRAPHS,
            );
            if !paragraphs.is_empty() {
                return Some(cap_excerpt(paragraphs.join(" ")));
            }
        }
    }

    let fallback = qualifying_paragraphs(
        doc.select(&paragraph),
        MAX_FALLBACK_PARAGRAPHS,
    );
    if fallback.is_empty() {
        None
    } else {
        Some(cap_excerpt(fallback.join(" ")))
    }
}

fn qualifying_paragraphs<'a, I>(paragraphs: I, limit: usize) -> Vec<String>
where
    I: Iterator<Item = ElementRef<'a>>,
{
    paragraphs
        .map(|p| {
            p.text()
                .collect::<String>()
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ")
        })
        .filter(|text| text.len() > MIN_PARAGRAPH_CHARS)
        .take(limit)
        .collect()
}

fn cap_excerpt(text: String) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    let capped = if words.len() > MAX_EXCERPT_WORDS {
        words[..MAX_EXCERPT_WORDS].join(" ")
    } else {
        words.join(" ")
    };
    if capped.chars().count() > MAX_EXCERPT_CHARS {
        let truncated: String = capped.chars().take(MAX_EXCERPT_CHARS).collect();
        format!("{truncated}…")
    } else {
        capped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_tag_wins_over_og_title() {
        let html = r#"<html><head>
            <title> Page Title </title>
            <meta property="og:title" content="OG Title">
        </head><body></body></html>"#;
        let meta = parse_metadata(html);
        assert_eq!(meta.title.as_deref(), Some("Page Title"));
    }

    #[test]
    fn og_title_used_when_title_tag_empty() {
        let html = r#"<html><head>
            <title>   </title>
            <meta property="og:title" content="OG Title">
        </head><body></body></html>"#;
        let meta = parse_metadata(html);
        assert_eq!(meta.title.as_deref(), Some("OG Title"));
    }

    #[test]
    fn twitter_title_is_last_resort() {
        let html = r#"<html><head>
            <meta name="twitter:title" content="Tweet Title">
        </head><body></body></html>"#;
        let meta = parse_metadata(html);
        assert_eq!(meta.title.as_deref(), Some("Tweet Title"));
    }

    #[test]
    fn description_author_date_site_chains() {
        let html = r#"<html><head>
            <meta property="og:description" content="About the page">
            <meta property="article:author" content="A. Writer">
            <meta property="article:published_time" content="2026-01-05T10:00:00Z">
            <meta property="og:site_name" content="Example Site">
        </head><body></body></html>"#;
        let meta = parse_metadata(html);
        assert_eq!(meta.description.as_deref(), Some("About the page"));
        assert_eq!(meta.author.as_deref(), Some("A. Writer"));
        assert_eq!(meta.published.as_deref(), Some("2026-01-05T10:00:00Z"));
        assert_eq!(meta.site_name.as_deref(), Some("Example Site"));
    }

    #[test]
    fn empty_document_yields_all_none() {
        let meta = parse_metadata("<html><head></head><body></body></html>");
        assert_eq!(meta, PageMetadata::default());
    }

    #[test]
    fn garbage_input_never_panics() {
        let meta = parse_metadata("<<<<not <html at > all");
        assert!(meta.title.is_none());
        assert!(meta.excerpt.is_none());
    }

    fn long_paragraph(n: usize) -> String {
        format!("<p>{}</p>", "lorem ipsum dolor sit amet consectetur ".repeat(n))
    }

    #[test]
    fn excerpt_prefers_article_container() {
        let html = format!(
            "<html><body><div class=\"content\">{}</div><article>{}</article></body></html>",
            long_paragraph(3),
            "<p>Inside the article body there is a fairly long paragraph of text here.</p>"
        );
        let meta = parse_metadata(&html);
        assert!(meta
            .excerpt
            .as_deref()
            .unwrap()
            .starts_with("Inside the article body"));
    }

    #[test]
    fn excerpt_skips_short_paragraphs() {
        let html = "<html><body><article>\
            <p>short</p>\
            <p>This paragraph is comfortably longer than fifty characters in total.</p>\
            </article></body></html>";
        let meta = parse_metadata(html);
        assert_eq!(
            meta.excerpt.as_deref(),
            Some("This paragraph is comfortably longer than fifty characters in total.")
        );
    }

    #[test]
    fn excerpt_takes_at_most_five_container_paragraphs() {
        let para = "<p>Each of these paragraphs is long enough to qualify for the excerpt.</p>";
        let html = format!("<html><body><article>{}</article></body></html>", para.repeat(7));
        let meta = parse_metadata(&html);
        let excerpt = meta.excerpt.unwrap();
        assert_eq!(excerpt.matches("qualify").count(), 5);
    }

    #[test]
    fn excerpt_falls_back_to_body_paragraphs() {
        let html = "<html><body>\
            <p>No container here, but this paragraph easily clears the length bar.</p>\
            </body></html>";
        let meta = parse_metadata(html);
        assert!(meta.excerpt.is_some());
    }

    #[test]
    fn excerpt_hard_truncates_with_ellipsis() {
        // 500 words of 10+ chars each overruns the 2000-char cap.
        let word = "abcdefghij";
        let html = format!(
            "<html><body><article><p>{}</p></article></body></html>",
            [word; 400].join(" ")
        );
        let meta = parse_metadata(&html);
        let excerpt = meta.excerpt.unwrap();
        assert!(excerpt.ends_with('…'));
        assert_eq!(excerpt.chars().count(), 2001);
    }

    #[test]
    fn excerpt_none_when_nothing_qualifies() {
        let html = "<html><body><p>tiny</p><p>also tiny</p></body></html>";
        assert!(parse_metadata(html).excerpt.is_none());
    }
}
