//! Bounded page fetch. Every failure degrades to empty metadata.

use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use linkdrop_core::PageMetadata;

use crate::parse::parse_metadata;

const FETCH_TIMEOUT: Duration = Duration::from_secs(5);
const USER_AGENT: &str = "linkdrop/0.1 (+https://github.com/linkdrop)";

/// Fetch a page and extract its metadata.
///
/// This stage never propagates a failure upward: an unreachable host, a
/// non-success status, or unreadable body all yield all-`None` metadata.
pub async fn fetch_metadata(client: &Client, url: &str) -> PageMetadata {
    match fetch_html(client, url).await {
        Ok(html) => parse_metadata(&html),
        Err(reason) => {
            debug!(url, %reason, "page fetch failed; degrading to empty metadata");
            PageMetadata::default()
        }
    }
}

async fn fetch_html(client: &Client, url: &str) -> anyhow::Result<String> {
    let response = client
        .get(url)
        .header("User-Agent", USER_AGENT)
        .timeout(FETCH_TIMEOUT)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        anyhow::bail!("status {status}");
    }

    Ok(response.text().await?)
}
