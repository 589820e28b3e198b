//! GitHub API error types.

use thiserror::Error;

/// Errors that can occur while talking to the GitHub API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The API answered with a non-success status.
    #[error("GitHub API error {status}: {message}")]
    Http { status: u16, message: String },

    /// The request could not be completed or its body could not be decoded.
    #[error("GitHub client error: {0}")]
    Client(#[source] octocrab::Error),

    /// A resource locator could not be parsed.
    #[error("Invalid resource URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

impl From<octocrab::Error> for ApiError {
    fn from(error: octocrab::Error) -> Self {
        match error {
            octocrab::Error::GitHub { source, .. } => Self::Http {
                status: source.status_code.as_u16(),
                message: source.message,
            },
            other => Self::Client(other),
        }
    }
}
