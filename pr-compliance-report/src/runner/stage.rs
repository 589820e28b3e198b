//! Pipeline stages.

use serde::Serialize;
use std::fmt;

/// Which part of the pipeline a run executes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Fetch merged pull requests and write the intermediate artifact.
    Extract,

    /// Read the intermediate artifact and write the report.
    Evaluate,

    /// Extract, then evaluate.
    #[default]
    All,
}

impl Stage {
    /// Returns true if the extractor runs in this stage.
    #[must_use]
    pub fn runs_extract(&self) -> bool {
        matches!(self, Self::Extract | Self::All)
    }

    /// Returns true if the evaluator runs in this stage.
    #[must_use]
    pub fn runs_evaluate(&self) -> bool {
        matches!(self, Self::Evaluate | Self::All)
    }

    /// Returns the stage name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Extract => "extract",
            Self::Evaluate => "evaluate",
            Self::All => "all",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
