//! Extraction results.

use crate::models::PullRequestRecord;
use serde::Serialize;

/// Merged pull requests gathered by paginating the closed listing.
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    /// Merged pull requests, in listing order.
    pub pull_requests: Vec<PullRequestRecord>,

    /// Number of listing pages requested, including the terminating one.
    pub pages_requested: u32,

    /// Set when pagination stopped on a failed request instead of an empty page.
    pub interruption: Option<Interruption>,
}

impl Extraction {
    /// Returns true if pagination stopped early and results may be incomplete.
    #[must_use]
    pub fn is_partial(&self) -> bool {
        self.interruption.is_some()
    }
}

/// Why pagination stopped before reaching the end of the listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Interruption {
    /// Page whose request failed.
    pub page: u32,

    /// Error message of the failed request.
    pub error: String,
}
