//! GitHub API objects consumed by the audit.

mod pull_request;
mod review;
mod status;

pub use pull_request::{Account, PullRequestRecord, GHOST_LOGIN};
pub use review::{ReviewRecord, ReviewState};
pub use status::{StatusRecord, StatusState};
