use async_trait::async_trait;

use crate::error::IngestError;
use crate::types::{Attachment, ItemPatch, SavedItem, StoredItem};

/// A chat-style completion collaborator used by the enrichment client.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Provider name (e.g. "openai", "mock").
    fn name(&self) -> &str;

    /// Send one completion request and return the raw response text.
    async fn complete(&self, request: &CompletionRequest) -> anyhow::Result<String>;
}

/// Request to a completion provider.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub system_prompt: String,
    pub user_prompt: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// The external item store: list/create/delete-all/patch by id.
///
/// The store is the sole arbiter of ordering between concurrent saves and
/// clears; this layer adds no mutual exclusion.
#[async_trait]
pub trait ItemStore: Send + Sync {
    async fn list(&self) -> Result<Vec<StoredItem>, IngestError>;

    async fn create(&self, item: SavedItem) -> Result<StoredItem, IngestError>;

    async fn delete_all(&self) -> Result<(), IngestError>;

    async fn patch(&self, id: &str, patch: ItemPatch) -> Result<StoredItem, IngestError>;
}

/// One attachment mirrored into durable object storage.
#[derive(Debug, Clone)]
pub struct MirroredMedia {
    pub public_url: String,
    pub content_type: String,
}

/// Mirrors message attachments from the transport's media endpoint into
/// object storage.
#[async_trait]
pub trait MediaMirror: Send + Sync {
    /// Mirror every attachment concurrently. The outer error is reserved for
    /// fail-fast conditions (missing credentials); the inner results are in
    /// attachment index order, one per input, and a failed attachment never
    /// cancels its siblings.
    async fn mirror_all(
        &self,
        attachments: &[Attachment],
    ) -> Result<Vec<Result<MirroredMedia, IngestError>>, IngestError>;
}
