//! HTTP adapter for the external item store.
//!
//! A REST-like collaborator: list/create/delete-all on the collection URL,
//! patch on `<collection>/<id>`. Every call carries the static `api_key`
//! header. Failures surface as `IngestError::Store`; no automatic retries.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use tracing::debug;

use linkdrop_core::{IngestError, ItemPatch, ItemStore, SavedItem, StoredItem};

const STORE_TIMEOUT: Duration = Duration::from_secs(10);

pub struct HttpItemStore {
    client: Client,
    collection_url: String,
    api_key: String,
}

impl HttpItemStore {
    pub fn new(client: Client, collection_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client,
            collection_url: collection_url.into(),
            api_key: api_key.into(),
        }
    }

    fn authed(&self, builder: RequestBuilder) -> RequestBuilder {
        builder.header("api_key", &self.api_key).timeout(STORE_TIMEOUT)
    }

    fn store_err(context: &str, e: impl std::fmt::Display) -> IngestError {
        IngestError::Store(format!("{context}: {e}"))
    }
}

#[async_trait]
impl ItemStore for HttpItemStore {
    async fn list(&self) -> Result<Vec<StoredItem>, IngestError> {
        let response = self
            .authed(self.client.get(&self.collection_url))
            .send()
            .await
            .map_err(|e| Self::store_err("list request failed", e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(IngestError::Store(format!("list returned {status}")));
        }

        response
            .json()
            .await
            .map_err(|e| Self::store_err("list response was not a collection", e))
    }

    async fn create(&self, item: SavedItem) -> Result<StoredItem, IngestError> {
        debug!(url = %item.url, category = %item.category, "creating item");
        let response = self
            .authed(self.client.post(&self.collection_url))
            .json(&item)
            .send()
            .await
            .map_err(|e| Self::store_err("create request failed", e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(IngestError::Store(format!("create returned {status}")));
        }

        response
            .json()
            .await
            .map_err(|e| Self::store_err("create response was not an item", e))
    }

    async fn delete_all(&self) -> Result<(), IngestError> {
        let response = self
            .authed(self.client.delete(&self.collection_url))
            .send()
            .await
            .map_err(|e| Self::store_err("delete request failed", e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(IngestError::Store(format!("delete returned {status}")));
        }
        Ok(())
    }

    async fn patch(&self, id: &str, patch: ItemPatch) -> Result<StoredItem, IngestError> {
        let url = format!("{}/{id}", self.collection_url.trim_end_matches('/'));
        let response = self
            .authed(self.client.patch(&url))
            .json(&patch)
            .send()
            .await
            .map_err(|e| Self::store_err("patch request failed", e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(IngestError::Store(format!("patch returned {status}")));
        }

        response
            .json()
            .await
            .map_err(|e| Self::store_err("patch response was not an item", e))
    }
}
