//! Pull request records.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Login reported when the author account no longer exists.
pub const GHOST_LOGIN: &str = "ghost";

/// A pull request as returned by the closed pull request listing.
///
/// Only the fields the audit reads are typed. Every other field of the API
/// object is kept in `extra` so the intermediate artifact carries the full
/// record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PullRequestRecord {
    /// Pull request number, unique per repository.
    pub number: u64,

    /// Pull request title.
    pub title: String,

    /// Account that opened the pull request; `None` when GitHub reports null.
    #[serde(default)]
    pub user: Option<Account>,

    /// Merge timestamp; `None` for pull requests closed without merging.
    #[serde(default)]
    pub merged_at: Option<DateTime<Utc>>,

    /// API locator of the head commit's statuses.
    pub statuses_url: String,

    /// Remaining API fields, carried through unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PullRequestRecord {
    /// Creates a record with only the fields the audit reads.
    pub fn new(
        number: u64,
        title: impl Into<String>,
        author: impl Into<String>,
        merged_at: Option<DateTime<Utc>>,
        statuses_url: impl Into<String>,
    ) -> Self {
        Self {
            number,
            title: title.into(),
            user: Some(Account {
                login: author.into(),
                extra: Map::new(),
            }),
            merged_at,
            statuses_url: statuses_url.into(),
            extra: Map::new(),
        }
    }

    /// Returns true if the pull request carries a merge timestamp.
    #[must_use]
    pub fn is_merged(&self) -> bool {
        self.merged_at.is_some()
    }

    /// Login of the author, or [`GHOST_LOGIN`] when the account is gone.
    #[must_use]
    pub fn author(&self) -> &str {
        self.user
            .as_ref()
            .map_or(GHOST_LOGIN, |user| user.login.as_str())
    }

    /// Merge timestamp in the API's `YYYY-MM-DDTHH:MM:SSZ` form, or empty.
    #[must_use]
    pub fn merged_at_display(&self) -> String {
        self.merged_at
            .map(|t| t.to_rfc3339_opts(SecondsFormat::Secs, true))
            .unwrap_or_default()
    }
}

/// A GitHub account reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Account login.
    pub login: String,

    /// Remaining API fields, carried through unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
