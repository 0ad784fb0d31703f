pub mod error;
pub mod traits;
pub mod types;

pub use error::IngestError;
pub use traits::{CompletionProvider, CompletionRequest, ItemStore, MediaMirror, MirroredMedia};
pub use types::{
    AiEnrichment, Attachment, Category, Classification, IncomingMessage, ItemKind, ItemPatch,
    ItemStatus, PageMetadata, SavedItem, StoredItem,
};
