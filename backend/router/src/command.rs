//! Inbox command classification.
//!
//! Mutually exclusive, checked in priority order: attachments beat text
//! commands, exact commands beat link detection, and anything else prompts
//! the user for a link.

use linkdrop_classify::extract_url;

/// The command an inbound message resolves to. Per-request, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<'a> {
    SaveMedia,
    Show,
    ShowAndClear,
    Clear,
    SaveLink(&'a str),
    Prompt,
}

/// Classify a message body (case-insensitive, trimmed).
pub fn classify_command(body: &str, has_attachments: bool) -> Command<'_> {
    if has_attachments {
        return Command::SaveMedia;
    }

    let normalized = body.trim().to_lowercase();
    match normalized.as_str() {
        "show" => return Command::Show,
        "show & clear" => return Command::ShowAndClear,
        "clear" => return Command::Clear,
        _ => {}
    }

    match extract_url(body) {
        Some(url) => Command::SaveLink(url),
        None => Command::Prompt,
    }
}
