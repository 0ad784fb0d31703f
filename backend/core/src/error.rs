use thiserror::Error;

/// Error taxonomy for the ingestion pipeline.
///
/// Transport and parse failures degrade inside their stage and rarely reach a
/// caller; credential and store failures are the ones surfaced to the user.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("transport failure for {url}: {reason}")]
    Transport { url: String, reason: String },

    #[error("enrichment failed: {0}")]
    Enrichment(String),

    #[error("missing credential: {0}")]
    CredentialMissing(&'static str),

    #[error("item store error: {0}")]
    Store(String),

    #[error("parse error: {0}")]
    Parse(String),
}
