//! Status mutations built on the store's patch operation.
//!
//! The only allowed transitions are `inbox <-> archived`; `viewed_at` is set
//! once and never cleared.

use chrono::{DateTime, Utc};

use linkdrop_core::{IngestError, ItemPatch, ItemStatus, ItemStore, StoredItem};

pub async fn archive(store: &dyn ItemStore, id: &str) -> Result<StoredItem, IngestError> {
    store
        .patch(
            id,
            ItemPatch {
                status: Some(ItemStatus::Archived),
                viewed_at: None,
            },
        )
        .await
}

pub async fn unarchive(store: &dyn ItemStore, id: &str) -> Result<StoredItem, IngestError> {
    store
        .patch(
            id,
            ItemPatch {
                status: Some(ItemStatus::Inbox),
                viewed_at: None,
            },
        )
        .await
}

/// Record that an item was viewed. The first viewing timestamp wins; later
/// calls leave it untouched.
pub async fn mark_viewed(
    store: &dyn ItemStore,
    id: &str,
    now: DateTime<Utc>,
) -> Result<StoredItem, IngestError> {
    let existing = store
        .list()
        .await?
        .into_iter()
        .find(|stored| stored.id == id)
        .ok_or_else(|| IngestError::Store(format!("no item with id {id}")))?;

    if existing.item.viewed_at.is_some() {
        return Ok(existing);
    }

    store
        .patch(
            id,
            ItemPatch {
                status: None,
                viewed_at: Some(now),
            },
        )
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use linkdrop_core::{Category, ItemKind, SavedItem};

    use crate::memory::MemoryStore;

    fn item() -> SavedItem {
        SavedItem {
            title: "Title".into(),
            page_title: None,
            url: "https://example.com".into(),
            kind: ItemKind::Link,
            tags: vec!["unlabeled".into()],
            category: Category::Other,
            status: ItemStatus::Inbox,
            summary: None,
            source: "Example".into(),
            saved_by: "Alice".into(),
            saved_by_number: "+15550001111".into(),
            timestamp: Utc::now(),
            viewed_at: None,
        }
    }

    #[tokio::test]
    async fn archive_and_unarchive_round_trip() {
        let store = MemoryStore::new();
        let stored = store.create(item()).await.unwrap();

        let archived = archive(&store, &stored.id).await.unwrap();
        assert_eq!(archived.item.status, ItemStatus::Archived);

        let unarchived = unarchive(&store, &stored.id).await.unwrap();
        assert_eq!(unarchived.item.status, ItemStatus::Inbox);

        // Listing reflects the most recent mutation.
        let listed = store.list().await.unwrap();
        assert_eq!(listed[0].item.status, ItemStatus::Inbox);
    }

    #[tokio::test]
    async fn viewed_at_is_set_once_and_stable() {
        let store = MemoryStore::new();
        let stored = store.create(item()).await.unwrap();
        assert!(stored.item.viewed_at.is_none());

        let first = Utc::now();
        let viewed = mark_viewed(&store, &stored.id, first).await.unwrap();
        assert_eq!(viewed.item.viewed_at, Some(first));

        let later = first + Duration::hours(1);
        let again = mark_viewed(&store, &stored.id, later).await.unwrap();
        assert_eq!(again.item.viewed_at, Some(first));
    }

    #[tokio::test]
    async fn archiving_does_not_touch_viewed_at() {
        let store = MemoryStore::new();
        let stored = store.create(item()).await.unwrap();
        let when = Utc::now();
        mark_viewed(&store, &stored.id, when).await.unwrap();

        let archived = archive(&store, &stored.id).await.unwrap();
        assert_eq!(archived.item.viewed_at, Some(when));
    }
}
