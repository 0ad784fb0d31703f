pub mod fetch;
pub mod parse;

pub use fetch::fetch_metadata;
pub use parse::parse_metadata;
