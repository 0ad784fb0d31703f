//! Authenticated download from the transport's media endpoint.

use bytes::Bytes;
use reqwest::Client;

use linkdrop_core::{Attachment, IngestError};

/// Content type assumed when neither the response nor the transport named one.
const DEFAULT_CONTENT_TYPE: &str = "image/jpeg";

/// HTTP basic-auth credentials for the transport's media endpoint.
#[derive(Debug, Clone)]
pub struct TransportCredentials {
    pub account_sid: String,
    pub auth_token: String,
}

#[derive(Debug, Clone)]
pub struct DownloadedMedia {
    pub bytes: Bytes,
    pub content_type: String,
}

/// Download one attachment's binary.
pub async fn download_attachment(
    client: &Client,
    credentials: &TransportCredentials,
    attachment: &Attachment,
) -> Result<DownloadedMedia, IngestError> {
    let response = client
        .get(&attachment.url)
        .basic_auth(&credentials.account_sid, Some(&credentials.auth_token))
        .send()
        .await
        .map_err(|e| IngestError::Transport {
            url: attachment.url.clone(),
            reason: e.to_string(),
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(IngestError::Transport {
            url: attachment.url.clone(),
            reason: format!("media download returned {status}"),
        });
    }

    let header_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let content_type = resolve_content_type(header_type, attachment.content_type.clone());

    let bytes = response.bytes().await.map_err(|e| IngestError::Transport {
        url: attachment.url.clone(),
        reason: e.to_string(),
    })?;

    Ok(DownloadedMedia { bytes, content_type })
}

/// Response header wins, then the transport's hint, then the image default.
pub(crate) fn resolve_content_type(header: Option<String>, hint: Option<String>) -> String {
    header
        .filter(|t| !t.trim().is_empty())
        .or(hint)
        .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_content_type_wins() {
        let resolved = resolve_content_type(Some("image/png".into()), Some("image/webp".into()));
        assert_eq!(resolved, "image/png");
    }

    #[test]
    fn hint_used_when_header_blank() {
        let resolved = resolve_content_type(Some("  ".into()), Some("image/webp".into()));
        assert_eq!(resolved, "image/webp");
    }

    #[test]
    fn defaults_to_jpeg() {
        assert_eq!(resolve_content_type(None, None), "image/jpeg");
    }
}
