pub mod http;
pub mod memory;
pub mod status;

pub use http::HttpItemStore;
pub use memory::MemoryStore;
pub use status::{archive, mark_viewed, unarchive};
