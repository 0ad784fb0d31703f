pub mod client;
pub mod decode;
pub mod prompt;
pub mod providers;

pub use client::EnrichmentClient;
pub use decode::{decode_completion, CompletionOutcome};
pub use prompt::{build_request, detect_content_kind, ContentKind};
