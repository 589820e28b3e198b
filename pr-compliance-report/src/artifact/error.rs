//! Artifact error types.

use thiserror::Error;

/// Errors that can occur while reading or writing run artifacts.
#[derive(Debug, Error)]
pub enum ArtifactError {
    /// Filesystem error.
    #[error("Failed to access '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The intermediate artifact could not be encoded or decoded.
    #[error("Invalid pull request artifact '{path}': {source}")]
    JsonError {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// The report could not be written.
    #[error("Failed to write report '{path}': {source}")]
    CsvError {
        path: String,
        #[source]
        source: csv::Error,
    },
}
