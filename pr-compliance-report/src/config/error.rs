//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while assembling a run configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a file.
    #[error("Failed to read file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML content.
    #[error("Failed to parse config file '{path}': {source}")]
    TomlError {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// Validation error in a setting.
    #[error("Invalid setting '{field}': {message}")]
    ValidationError { field: String, message: String },

    /// The GitHub credential was not provided.
    #[error("Missing {variable} environment variable")]
    MissingToken { variable: String },
}
