//! Report rows.

use crate::evaluate::Verdict;
use crate::models::PullRequestRecord;
use serde::Serialize;

/// One line of the compliance report. Field order is the column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    #[serde(rename = "PR_Number")]
    pub number: u64,

    #[serde(rename = "Title")]
    pub title: String,

    #[serde(rename = "Author")]
    pub author: String,

    #[serde(rename = "Merged_At")]
    pub merged_at: String,

    /// Whether at least one review approved the pull request.
    #[serde(rename = "CR_Passed")]
    pub review_approved: Verdict,

    /// Whether every commit status reported success.
    #[serde(rename = "Checks_Passed")]
    pub checks_passed: Verdict,
}

impl ReportRow {
    /// Combines a pull request with its two verdicts.
    pub fn new(
        pull_request: &PullRequestRecord,
        review_approved: Verdict,
        checks_passed: Verdict,
    ) -> Self {
        Self {
            number: pull_request.number,
            title: pull_request.title.clone(),
            author: pull_request.author().to_string(),
            merged_at: pull_request.merged_at_display(),
            review_approved,
            checks_passed,
        }
    }
}
