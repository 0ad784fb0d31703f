use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Inbound message
// ---------------------------------------------------------------------------

/// One media attachment on an inbound message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attachment {
    /// Remote URL on the transport's authenticated media endpoint.
    pub url: String,
    /// MIME type as reported by the transport; `image/jpeg` is assumed when absent.
    pub content_type: Option<String>,
}

/// A normalized inbound chat message. Lives only for the duration of one request.
#[derive(Debug, Clone)]
pub struct IncomingMessage {
    /// Raw sender identifier (e.g. `whatsapp:+15551234567`).
    pub sender: String,
    pub body: String,
    pub attachments: Vec<Attachment>,
}

// ---------------------------------------------------------------------------
// Saved items
// ---------------------------------------------------------------------------

/// Fixed category enumeration for saved items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Category {
    #[serde(rename = "LinkedIn Posts")]
    LinkedInPosts,
    Social,
    Videos,
    Podcasts,
    #[serde(rename = "News Articles")]
    NewsArticles,
    Screenshots,
    #[default]
    Other,
}

impl Category {
    /// Human-facing label, identical to the wire representation.
    pub fn label(&self) -> &'static str {
        match self {
            Category::LinkedInPosts => "LinkedIn Posts",
            Category::Social => "Social",
            Category::Videos => "Videos",
            Category::Podcasts => "Podcasts",
            Category::NewsArticles => "News Articles",
            Category::Screenshots => "Screenshots",
            Category::Other => "Other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Link,
    Image,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    #[default]
    Inbox,
    Archived,
}

/// The persisted inbox record.
///
/// Invariants: `tags` is never empty (the classifier falls back to a sentinel
/// tag), `viewed_at` is set at most once and never cleared.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedItem {
    pub title: String,
    /// Original page `<title>`, when one was extracted.
    pub page_title: Option<String>,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    pub tags: Vec<String>,
    pub category: Category,
    pub status: ItemStatus,
    pub summary: Option<String>,
    /// Human-readable publisher/platform label.
    pub source: String,
    pub saved_by: String,
    pub saved_by_number: String,
    pub timestamp: DateTime<Utc>,
    pub viewed_at: Option<DateTime<Utc>>,
}

/// A saved item as returned by the store, with its store-assigned id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredItem {
    pub id: String,
    #[serde(flatten)]
    pub item: SavedItem,
}

/// Partial update applied to a stored item. Only set fields are sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ItemStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub viewed_at: Option<DateTime<Utc>>,
}

// ---------------------------------------------------------------------------
// Derived enrichment data (never persisted standalone)
// ---------------------------------------------------------------------------

/// Deterministic classification of a URL: pure function of the URL string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub category: Category,
    pub tags: Vec<String>,
    pub source: String,
}

/// Metadata scraped from the linked page. Every field degrades to `None`
/// independently; a failed fetch yields all `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageMetadata {
    pub title: Option<String>,
    pub description: Option<String>,
    pub author: Option<String>,
    pub published: Option<String>,
    pub site_name: Option<String>,
    pub excerpt: Option<String>,
}

/// Machine-generated title and summary from the AI collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiEnrichment {
    pub title: String,
    pub summary: String,
}
