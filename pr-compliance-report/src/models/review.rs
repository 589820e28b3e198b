//! Pull request review records.

use serde::{Deserialize, Serialize};

/// Review verdict states reported by GitHub.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewState {
    Approved,
    ChangesRequested,
    Commented,
    Dismissed,
    Pending,
    /// Any state this tool does not know about.
    #[serde(other)]
    Other,
}

/// A single review on a pull request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewRecord {
    /// Review verdict.
    pub state: ReviewState,
}

impl ReviewRecord {
    /// Creates a review with the given state.
    pub fn new(state: ReviewState) -> Self {
        Self { state }
    }

    /// Returns true if this review approves the pull request.
    #[must_use]
    pub fn is_approval(&self) -> bool {
        self.state == ReviewState::Approved
    }
}
