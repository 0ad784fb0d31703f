//! The enrichment client: prompt construction, provider call, decode, and
//! the malformed-payload fallback.

use std::sync::Arc;

use tracing::{debug, warn};

use linkdrop_core::{AiEnrichment, CompletionProvider, IngestError, PageMetadata};

use crate::decode::{decode_completion, CompletionOutcome};
use crate::prompt::build_request;

/// Placeholder title when neither the AI nor the page supplied one.
const PLACEHOLDER_TITLE: &str = "Saved Link";

/// Requests a descriptive title and a 1-2 sentence summary for a URL.
///
/// This stage is best-effort by contract: callers must continue without it on
/// `Err`, never abort the save.
pub struct EnrichmentClient {
    provider: Arc<dyn CompletionProvider>,
}

impl EnrichmentClient {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self { provider }
    }

    pub async fn enrich(
        &self,
        url: &str,
        meta: &PageMetadata,
    ) -> Result<AiEnrichment, IngestError> {
        let request = build_request(url, meta);
        debug!(provider = self.provider.name(), url, "requesting enrichment");

        let raw = self
            .provider
            .complete(&request)
            .await
            .map_err(|e| IngestError::Enrichment(e.to_string()))?;

        match decode_completion(&raw) {
            CompletionOutcome::Structured(enrichment) => Ok(enrichment),
            CompletionOutcome::Malformed(raw_text) => {
                warn!(url, "completion was not valid structured output; using raw text as summary");
                Ok(AiEnrichment {
                    title: meta
                        .title
                        .clone()
                        .unwrap_or_else(|| PLACEHOLDER_TITLE.to_string()),
                    summary: raw_text,
                })
            }
        }
    }
}
