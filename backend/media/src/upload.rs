//! Signed multipart upload to the object storage collaborator.

use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;
use sha2::{Digest, Sha256};
use tracing::debug;

use linkdrop_core::IngestError;

/// Object storage account configuration.
#[derive(Debug, Clone)]
pub struct ObjectStorageConfig {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
    pub folder: String,
}

#[derive(Debug, Clone)]
pub struct UploadedObject {
    pub public_url: String,
    pub public_id: String,
}

#[derive(Deserialize)]
struct UploadResponse {
    secure_url: String,
    public_id: String,
}

/// Upload signature: SHA-256 over the key-sorted `k=v` parameter string with
/// the shared secret appended, hex-encoded.
pub fn upload_signature(params: &[(&str, &str)], secret: &str) -> String {
    let mut sorted: Vec<&(&str, &str)> = params.iter().collect();
    sorted.sort_by_key(|(key, _)| *key);

    let joined = sorted
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&");

    let mut hasher = Sha256::new();
    hasher.update(joined.as_bytes());
    hasher.update(secret.as_bytes());
    hex::encode(hasher.finalize())
}

/// Content-addressed-by-time public identifier for an upload.
pub fn make_public_id(base_name: &str, unix_timestamp: i64) -> String {
    format!("{base_name}-{unix_timestamp}")
}

/// Upload one binary buffer and return its public URL.
pub async fn upload_media(
    client: &Client,
    config: &ObjectStorageConfig,
    bytes: Bytes,
    content_type: &str,
    base_name: &str,
) -> Result<UploadedObject, IngestError> {
    let timestamp = chrono::Utc::now().timestamp();
    let public_id = make_public_id(base_name, timestamp);
    let timestamp_str = timestamp.to_string();

    let signature = upload_signature(
        &[
            ("folder", config.folder.as_str()),
            ("public_id", public_id.as_str()),
            ("timestamp", timestamp_str.as_str()),
        ],
        &config.api_secret,
    );

    let file_part = Part::bytes(bytes.to_vec())
        .file_name(public_id.clone())
        .mime_str(content_type)
        .map_err(|e| IngestError::Parse(format!("invalid content type {content_type}: {e}")))?;

    let form = Form::new()
        .text("api_key", config.api_key.clone())
        .text("timestamp", timestamp_str)
        .text("folder", config.folder.clone())
        .text("public_id", public_id.clone())
        .text("signature", signature)
        .part("file", file_part);

    let upload_url = format!(
        "https://api.cloudinary.com/v1_1/{}/image/upload",
        config.cloud_name
    );
    debug!(public_id = %public_id, "uploading media");

    let response = client
        .post(&upload_url)
        .multipart(form)
        .send()
        .await
        .map_err(|e| IngestError::Transport {
            url: upload_url.clone(),
            reason: e.to_string(),
        })?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(IngestError::Transport {
            url: upload_url,
            reason: format!("upload returned {status}: {body}"),
        });
    }

    let parsed: UploadResponse = response.json().await.map_err(|e| IngestError::Transport {
        url: upload_url,
        reason: format!("unreadable upload response: {e}"),
    })?;

    Ok(UploadedObject {
        public_url: parsed.secure_url,
        public_id: parsed.public_id,
    })
}
