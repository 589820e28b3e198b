//! Commit status records.

use serde::{Deserialize, Serialize};

/// Commit status states reported by GitHub.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusState {
    Success,
    Failure,
    Error,
    Pending,
    /// Any state this tool does not know about.
    #[serde(other)]
    Other,
}

/// A single commit status entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusRecord {
    /// Status state.
    pub state: StatusState,

    /// Name of the check that reported the status.
    #[serde(default)]
    pub context: Option<String>,
}

impl StatusRecord {
    /// Creates a status with the given state and no context.
    pub fn new(state: StatusState) -> Self {
        Self {
            state,
            context: None,
        }
    }

    /// Returns true if the status reports success.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.state == StatusState::Success
    }
}
