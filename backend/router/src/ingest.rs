//! Link enrichment and item assembly.
//!
//! Deterministic classification always runs and is the source of truth for
//! category/tags/source; the AI stage may only override title and summary.

use chrono::{DateTime, Utc};
use reqwest::Client;
use tracing::warn;

use linkdrop_classify::{classify, heuristic_title, normalize_url};
use linkdrop_core::{ItemKind, ItemStatus, SavedItem};
use linkdrop_enrich::EnrichmentClient;
use linkdrop_metadata::fetch_metadata;

/// Who is saving the item.
#[derive(Debug, Clone)]
pub struct Saver {
    pub display_name: String,
    pub number: String,
}

/// Run the full enrichment pipeline for one URL and assemble the draft item.
///
/// Never fails: metadata degrades to `None`s and a failed AI stage is logged
/// and skipped. Only the subsequent persist can surface an error.
pub async fn ingest_link(
    http: &Client,
    enrichment: Option<&EnrichmentClient>,
    raw_url: &str,
    saver: &Saver,
    now: DateTime<Utc>,
) -> SavedItem {
    let url = normalize_url(raw_url);
    let classification = classify(&url);
    let meta = fetch_metadata(http, &url).await;

    let ai = match enrichment {
        Some(client) => match client.enrich(&url, &meta).await {
            Ok(enrichment) => Some(enrichment),
            Err(e) => {
                warn!(url = %url, error = %e, "AI enrichment failed; continuing without it");
                None
            }
        },
        None => None,
    };

    // Title precedence: AI title, then page title, then the category
    // heuristic. Summary precedence: AI summary, then page description.
    let title = ai
        .as_ref()
        .map(|a| a.title.clone())
        .or_else(|| meta.title.clone())
        .unwrap_or_else(|| heuristic_title(classification.category).to_string());
    let summary = ai.as_ref().map(|a| a.summary.clone()).or_else(|| meta.description.clone());

    SavedItem {
        title,
        page_title: meta.title,
        url,
        kind: ItemKind::Link,
        tags: classification.tags,
        category: classification.category,
        status: ItemStatus::Inbox,
        summary,
        source: classification.source,
        saved_by: saver.display_name.clone(),
        saved_by_number: saver.number.clone(),
        timestamp: now,
        viewed_at: None,
    }
}
