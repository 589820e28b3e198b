//! GitHub credential handling.

use crate::config::ConfigError;

/// Environment variable holding the GitHub token.
pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

/// Validates that a GitHub token was supplied.
///
/// A missing or blank token is a pre-flight failure: callers must not build
/// an API client or send any request when this returns an error.
///
/// # Errors
///
/// Returns [`ConfigError::MissingToken`] when the token is absent or blank.
pub fn require_token(token: Option<String>) -> Result<String, ConfigError> {
    match token {
        Some(token) if !token.trim().is_empty() => Ok(token),
        _ => Err(ConfigError::MissingToken {
            variable: TOKEN_ENV_VAR.to_string(),
        }),
    }
}
