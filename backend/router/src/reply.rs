//! Outbound reply categories and their rendering.
//!
//! The exact wording is product copy; the categories (saved / inbox / empty /
//! cleared / prompt / error) are the observable contract and stay distinct.

use linkdrop_core::StoredItem;

/// Inbox entries shown per `show` request.
const PREVIEW_LIMIT: usize = 5;
/// Summary snippet length in the preview.
const SUMMARY_PREVIEW_CHARS: usize = 100;

/// Which user-facing action failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailedAction {
    Save,
    Fetch,
    Clear,
    Media,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Saved { title: String },
    Inbox { preview: String },
    InboxCleared { preview: String },
    EmptyInbox,
    Cleared,
    MediaSaved { saved: usize, failed: usize },
    Prompt,
    Error { action: FailedAction },
}

impl Reply {
    /// Render the reply as the outbound message text.
    pub fn render(&self) -> String {
        match self {
            Reply::Saved { title } => format!("📌 Saved: {title}"),
            Reply::Inbox { preview } => format!("📋 Inbox:\n{preview}"),
            Reply::InboxCleared { preview } => {
                format!("📋 Inbox:\n{preview}\n\n🗑️ Cleared after viewing")
            }
            Reply::EmptyInbox => "📭 Inbox is empty".to_string(),
            Reply::Cleared => "🗑️ Content Inbox cleared".to_string(),
            Reply::MediaSaved { saved, failed } => {
                let noun = if *saved == 1 { "screenshot" } else { "screenshots" };
                if *failed == 0 {
                    format!("📸 Saved {saved} {noun}")
                } else {
                    format!("📸 Saved {saved} {noun} ({failed} failed)")
                }
            }
            Reply::Prompt => "⚠️ Please send a link.".to_string(),
            Reply::Error { action } => match action {
                FailedAction::Save => "⚠️ Error saving content.".to_string(),
                FailedAction::Fetch => "⚠️ Could not fetch inbox".to_string(),
                FailedAction::Clear => "⚠️ Failed to clear content".to_string(),
                FailedAction::Media => "⚠️ Could not save screenshots.".to_string(),
            },
        }
    }
}

/// Format the first five items, in store order, one entry per item:
/// `- <title> — <source> (<category>) [<tags>] · by <saved_by>` with an
/// indented summary snippet when the item has one.
pub fn format_preview(items: &[StoredItem]) -> String {
    items
        .iter()
        .take(PREVIEW_LIMIT)
        .map(format_entry)
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_entry(stored: &StoredItem) -> String {
    let item = &stored.item;
    let mut entry = format!(
        "- {} — {} ({}) [{}] · by {}",
        item.title,
        item.source,
        item.category,
        item.tags.join(", "),
        item.saved_by,
    );
    if let Some(summary) = &item.summary {
        entry.push_str("\n  ");
        entry.push_str(&truncate_summary(summary));
    }
    entry
}

fn truncate_summary(summary: &str) -> String {
    if summary.chars().count() > SUMMARY_PREVIEW_CHARS {
        let truncated: String = summary.chars().take(SUMMARY_PREVIEW_CHARS).collect();
        format!("{truncated}…")
    } else {
        summary.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use linkdrop_core::{Category, ItemKind, ItemStatus, SavedItem};

    fn stored(title: &str, summary: Option<&str>) -> StoredItem {
        StoredItem {
            id: "1".into(),
            item: SavedItem {
                title: title.into(),
                page_title: None,
                url: "https://example.com".into(),
                kind: ItemKind::Link,
                tags: vec!["unlabeled".into()],
                category: Category::Other,
                status: ItemStatus::Inbox,
                summary: summary.map(str::to_string),
                source: "Example".into(),
                saved_by: "Alice".into(),
                saved_by_number: "+15550001111".into(),
                timestamp: Utc::now(),
                viewed_at: None,
            },
        }
    }

    #[test]
    fn entry_format_without_summary() {
        let preview = format_preview(&[stored("A Title", None)]);
        assert_eq!(preview, "- A Title — Example (Other) [unlabeled] · by Alice");
    }

    #[test]
    fn entry_includes_indented_summary() {
        let preview = format_preview(&[stored("A Title", Some("Short summary."))]);
        assert!(preview.ends_with("\n  Short summary."));
    }

    #[test]
    fn long_summary_truncated_at_100_chars_with_ellipsis() {
        let long = "x".repeat(140);
        let preview = format_preview(&[stored("A Title", Some(&long))]);
        let snippet = preview.split("\n  ").nth(1).unwrap();
        assert_eq!(snippet.chars().count(), 101);
        assert!(snippet.ends_with('…'));
    }

    #[test]
    fn summary_of_exactly_100_chars_is_untouched() {
        let exact = "y".repeat(100);
        let preview = format_preview(&[stored("A Title", Some(&exact))]);
        let snippet = preview.split("\n  ").nth(1).unwrap();
        assert_eq!(snippet, exact);
    }

    #[test]
    fn preview_caps_at_five_entries_in_order() {
        let items: Vec<StoredItem> = (0..7).map(|i| stored(&format!("Item {i}"), None)).collect();
        let preview = format_preview(&items);
        assert_eq!(preview.lines().count(), 5);
        assert!(preview.starts_with("- Item 0"));
        assert!(preview.contains("- Item 4"));
        assert!(!preview.contains("- Item 5"));
    }

    #[test]
    fn reply_categories_render_distinctly() {
        let replies = [
            Reply::Saved { title: "T".into() },
            Reply::EmptyInbox,
            Reply::Cleared,
            Reply::Prompt,
            Reply::Error { action: FailedAction::Save },
        ];
        let rendered: Vec<String> = replies.iter().map(Reply::render).collect();
        for (i, a) in rendered.iter().enumerate() {
            for b in rendered.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn media_reply_reports_partial_failure() {
        assert_eq!(
            Reply::MediaSaved { saved: 2, failed: 0 }.render(),
            "📸 Saved 2 screenshots"
        );
        assert_eq!(
            Reply::MediaSaved { saved: 1, failed: 1 }.render(),
            "📸 Saved 1 screenshot (1 failed)"
        );
    }
}
