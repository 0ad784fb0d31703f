//! Concurrent attachment mirroring: download from the transport, upload to
//! object storage, joined in attachment index order.

use async_trait::async_trait;
use reqwest::Client;
use tracing::{info, warn};

use linkdrop_core::{Attachment, IngestError, MediaMirror, MirroredMedia};

use crate::download::{download_attachment, TransportCredentials};
use crate::upload::{upload_media, ObjectStorageConfig};

/// Base name for mirrored screenshot objects.
const UPLOAD_BASE_NAME: &str = "screenshot";

pub struct MediaService {
    client: Client,
    transport: Option<TransportCredentials>,
    storage: Option<ObjectStorageConfig>,
}

impl MediaService {
    pub fn new(
        client: Client,
        transport: Option<TransportCredentials>,
        storage: Option<ObjectStorageConfig>,
    ) -> Self {
        Self {
            client,
            transport,
            storage,
        }
    }
}

#[async_trait]
impl MediaMirror for MediaService {
    async fn mirror_all(
        &self,
        attachments: &[Attachment],
    ) -> Result<Vec<Result<MirroredMedia, IngestError>>, IngestError> {
        let transport = self
            .transport
            .clone()
            .ok_or(IngestError::CredentialMissing("transport media credentials"))?;
        let storage = self
            .storage
            .clone()
            .ok_or(IngestError::CredentialMissing("object storage credentials"))?;

        // Fan out one task per attachment; awaiting the handles in spawn
        // order keeps results in attachment index order while the work runs
        // concurrently. A failed attachment never cancels its siblings.
        let handles: Vec<_> = attachments
            .iter()
            .cloned()
            .map(|attachment| {
                let client = self.client.clone();
                let transport = transport.clone();
                let storage = storage.clone();
                tokio::spawn(async move {
                    mirror_one(&client, &transport, &storage, &attachment).await
                })
            })
            .collect();

        let mut results = Vec::with_capacity(handles.len());
        for handle in handles {
            let result = match handle.await {
                Ok(result) => result,
                Err(join_error) => Err(IngestError::Transport {
                    url: String::new(),
                    reason: format!("mirror task failed: {join_error}"),
                }),
            };
            if let Err(e) = &result {
                warn!(error = %e, "attachment mirror failed");
            }
            results.push(result);
        }

        info!(
            total = results.len(),
            succeeded = results.iter().filter(|r| r.is_ok()).count(),
            "attachment fan-out complete"
        );
        Ok(results)
    }
}

async fn mirror_one(
    client: &Client,
    transport: &TransportCredentials,
    storage: &ObjectStorageConfig,
    attachment: &Attachment,
) -> Result<MirroredMedia, IngestError> {
    let downloaded = download_attachment(client, transport, attachment).await?;
    let uploaded = upload_media(
        client,
        storage,
        downloaded.bytes,
        &downloaded.content_type,
        UPLOAD_BASE_NAME,
    )
    .await?;

    Ok(MirroredMedia {
        public_url: uploaded.public_url,
        content_type: downloaded.content_type,
    })
}
