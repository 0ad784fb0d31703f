//! In-memory item store used by tests. Mirrors the remote collaborator's
//! observable behavior and counts calls so tests can assert on them.

use async_trait::async_trait;
use tokio::sync::Mutex;

use linkdrop_core::{IngestError, ItemPatch, ItemStore, SavedItem, StoredItem};

#[derive(Default)]
struct Inner {
    items: Vec<StoredItem>,
    next_id: u64,
    list_calls: u64,
    delete_calls: u64,
}

#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn list_calls(&self) -> u64 {
        self.inner.lock().await.list_calls
    }

    pub async fn delete_calls(&self) -> u64 {
        self.inner.lock().await.delete_calls
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.items.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl ItemStore for MemoryStore {
    async fn list(&self) -> Result<Vec<StoredItem>, IngestError> {
        let mut inner = self.inner.lock().await;
        inner.list_calls += 1;
        Ok(inner.items.clone())
    }

    async fn create(&self, item: SavedItem) -> Result<StoredItem, IngestError> {
        let mut inner = self.inner.lock().await;
        inner.next_id += 1;
        let stored = StoredItem {
            id: inner.next_id.to_string(),
            item,
        };
        inner.items.push(stored.clone());
        Ok(stored)
    }

    async fn delete_all(&self) -> Result<(), IngestError> {
        let mut inner = self.inner.lock().await;
        inner.delete_calls += 1;
        inner.items.clear();
        Ok(())
    }

    async fn patch(&self, id: &str, patch: ItemPatch) -> Result<StoredItem, IngestError> {
        let mut inner = self.inner.lock().await;
        let stored = inner
            .items
            .iter_mut()
            .find(|stored| stored.id == id)
            .ok_or_else(|| IngestError::Store(format!("no item with id {id}")))?;

        if let Some(status) = patch.status {
            stored.item.status = status;
        }
        if let Some(viewed_at) = patch.viewed_at {
            stored.item.viewed_at = Some(viewed_at);
        }
        Ok(stored.clone())
    }
}
