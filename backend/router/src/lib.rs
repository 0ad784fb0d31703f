pub mod command;
pub mod ingest;
pub mod reply;
pub mod router;

pub use command::{classify_command, Command};
pub use reply::{FailedAction, Reply};
pub use router::CommandRouter;
