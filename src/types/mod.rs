#[cfg(feature = "chat")]
pub mod chatlog;
pub mod entry;
pub mod errors;
pub mod player;
