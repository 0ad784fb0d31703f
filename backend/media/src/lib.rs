pub mod download;
pub mod mirror;
pub mod upload;

pub use download::{download_attachment, TransportCredentials};
pub use mirror::MediaService;
pub use upload::{upload_signature, ObjectStorageConfig};
