//! Runner error types.

/// Errors that abort a run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Configuration or credential errors.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// Artifact read/write errors.
    #[error(transparent)]
    Artifact(#[from] crate::artifact::ArtifactError),

    /// GitHub API client initialization errors.
    #[error(transparent)]
    Api(#[from] crate::github::ApiError),
}
