//! Tri-state lookup outcomes.

use serde::{Serialize, Serializer};

/// Outcome of a compliance lookup for one pull request.
///
/// `Unknown` is reported when the lookup itself failed, so a fetch failure is
/// never mistaken for a confirmed negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The requirement is met.
    Passed,

    /// The requirement is confirmed as not met.
    Failed,

    /// The lookup failed; the requirement could not be verified.
    Unknown,
}

impl Verdict {
    /// Maps a confirmed yes/no answer onto a verdict.
    #[must_use]
    pub fn from_bool(passed: bool) -> Self {
        if passed {
            Self::Passed
        } else {
            Self::Failed
        }
    }

    /// Returns the verdict as it appears in the report.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Passed => "True",
            Self::Failed => "False",
            Self::Unknown => "Unknown",
        }
    }

    /// Returns true for [`Verdict::Passed`].
    #[must_use]
    pub fn is_passed(&self) -> bool {
        matches!(self, Self::Passed)
    }

    /// Returns true for [`Verdict::Unknown`].
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }
}

impl Serialize for Verdict {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
