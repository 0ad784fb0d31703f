//! Content-kind detection and completion prompt construction.

use linkdrop_core::{CompletionRequest, PageMetadata};

/// Broad content families that get distinct summarization guidance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    SocialPost,
    Microblog,
    Video,
    Podcast,
    CodeRepository,
    Article,
}

/// First match wins, top to bottom, over the lowercased URL.
const KIND_RULES: &[(&[&str], ContentKind)] = &[
    (&["linkedin.com", "lnkd.in"], ContentKind::SocialPost),
    (&["twitter.com", "x.com"], ContentKind::Microblog),
    (&["youtube.com", "youtu.be"], ContentKind::Video),
    (&["spotify.com", "podcasts.apple.com"], ContentKind::Podcast),
    (&["github.com"], ContentKind::CodeRepository),
];

pub fn detect_content_kind(url: &str) -> ContentKind {
    let lower = url.to_lowercase();
    KIND_RULES
        .iter()
        .find(|(needles, _)| needles.iter().any(|n| lower.contains(n)))
        .map(|(_, kind)| *kind)
        .unwrap_or(ContentKind::Article)
}

fn guidance(kind: ContentKind) -> &'static str {
    match kind {
        ContentKind::SocialPost => {
            "This is a professional-network post. Title it by the author's point, \
             not the platform; summarize the argument or announcement being made."
        }
        ContentKind::Microblog => {
            "This is a microblog post. Capture the claim or observation in the \
             post itself, not the fact that it is a tweet."
        }
        ContentKind::Video => {
            "This is a video. Title it by the video's subject and summarize what \
             a viewer would learn or see."
        }
        ContentKind::Podcast => {
            "This is a podcast episode. Name the show or guest if known and \
             summarize the episode's topic."
        }
        ContentKind::CodeRepository => {
            "This is a code repository. Title it by the project name and purpose; \
             summarize what the software does."
        }
        ContentKind::Article => {
            "This is an article or general web page. Summarize its main point."
        }
    }
}

const SYSTEM_PROMPT: &str = "You write accurate titles and summaries for saved web links. \
     Always return ONLY a valid JSON object of the form \
     {\"title\": \"...\", \"summary\": \"...\"}. \
     The title is 5-12 descriptive words. The summary is 1-2 sentences, \
     at most 60 words. Do not fabricate facts; say when details are unknown.";

/// Build the completion request for a URL plus whatever metadata was resolved.
pub fn build_request(url: &str, meta: &PageMetadata) -> CompletionRequest {
    let kind = detect_content_kind(url);
    let field = |value: &Option<String>| value.clone().unwrap_or_else(|| "N/A".to_string());

    let user_prompt = format!(
        "{guidance}\n\nURL: {url}\nPage title: {title}\nDescription: {description}\n\
         Author: {author}\nSite: {site}\nExcerpt: {excerpt}",
        guidance = guidance(kind),
        title = field(&meta.title),
        description = field(&meta.description),
        author = field(&meta.author),
        site = field(&meta.site_name),
        excerpt = field(&meta.excerpt),
    );

    CompletionRequest {
        system_prompt: SYSTEM_PROMPT.to_string(),
        user_prompt,
        max_tokens: 200,
        temperature: 0.3,
    }
}
