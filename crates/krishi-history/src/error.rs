//! Error types for the history store.

use std::path::PathBuf;

/// Errors that can occur while loading or saving a history log.
#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    /// A log was asked to keep zero entries.
    #[error("history capacity must be at least 1")]
    ZeroCapacity,

    /// Reading or writing the history file failed.
    #[error("history file {}: {source}", path.display())]
    Io {
        /// File being accessed.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The history file is not valid JSON for the expected record type.
    #[error("history file {} is malformed: {source}", path.display())]
    Json {
        /// File being accessed.
        path: PathBuf,
        /// The underlying serialization error.
        #[source]
        source: serde_json::Error,
    },
}
