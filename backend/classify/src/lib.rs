pub mod extract;
pub mod rules;

pub use extract::{extract_url, normalize_url};
pub use rules::{classify, heuristic_title};
