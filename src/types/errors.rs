use std::io;
use thiserror::Error;

/// Errors produced while loading a chat log from disk.
///
/// In-memory parsing never fails: malformed lines are dropped, unparseable
/// channels default to `0`, and empty input is a valid empty result. Only the
/// file entry point is fallible.
#[derive(Debug, Error)]
pub enum LogParseError {
    #[error("Not a valid log file (expected .log or .txt): {path}")]
    InvalidExtension { path: String },
    #[error("Failed to open '{path}'. \nError: {source}")]
    OpenFile {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("Failed while reading '{path}'. \nError: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
}
