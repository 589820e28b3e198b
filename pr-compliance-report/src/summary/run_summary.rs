//! Run summary types.

use crate::evaluate::ReportRow;
use crate::extract::Extraction;
use crate::runner::Stage;

/// Summary of a complete run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Stage that was run.
    pub stage: Stage,

    /// Number of pull request listing pages requested.
    pub pages_requested: u32,

    /// Number of merged pull requests written to the intermediate artifact.
    pub pull_requests_extracted: usize,

    /// Whether pagination stopped on an error.
    pub extraction_partial: bool,

    /// Number of report rows written.
    pub rows_written: usize,

    /// Rows whose pull request had an approving review.
    pub reviews_approved: usize,

    /// Rows whose review lookup failed.
    pub reviews_unknown: usize,

    /// Rows whose status checks all passed.
    pub checks_passed: usize,

    /// Rows whose status lookup failed.
    pub checks_unknown: usize,
}

impl RunSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new(stage: Stage) -> Self {
        Self {
            stage,
            ..Default::default()
        }
    }

    /// Updates the summary with the extractor's result.
    pub fn record_extraction(&mut self, extraction: &Extraction) {
        self.pages_requested += extraction.pages_requested;
        self.pull_requests_extracted += extraction.pull_requests.len();
        self.extraction_partial |= extraction.is_partial();
    }

    /// Updates the summary with one report row.
    pub fn record_row(&mut self, row: &ReportRow) {
        self.rows_written += 1;
        if row.review_approved.is_passed() {
            self.reviews_approved += 1;
        }
        if row.review_approved.is_unknown() {
            self.reviews_unknown += 1;
        }
        if row.checks_passed.is_passed() {
            self.checks_passed += 1;
        }
        if row.checks_passed.is_unknown() {
            self.checks_unknown += 1;
        }
    }

    /// Returns true if any verdict could not be determined.
    #[must_use]
    pub fn has_unknowns(&self) -> bool {
        self.reviews_unknown > 0 || self.checks_unknown > 0
    }

    /// Returns true if every pull request passed both requirements.
    #[must_use]
    pub fn fully_compliant(&self) -> bool {
        self.reviews_approved == self.rows_written && self.checks_passed == self.rows_written
    }
}
