//! Error types for record sources.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    /// The backing file could not be read.
    #[error("Cannot read records from {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a JSON array of order records.
    #[error("Invalid record document: {0}")]
    Json(#[from] serde_json::Error),
}
