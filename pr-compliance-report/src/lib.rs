#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod artifact;
pub mod config;
pub mod evaluate;
pub mod extract;
pub mod github;
pub mod models;
pub mod runner;
pub mod summary;

pub use artifact::{read_pull_requests, write_pull_requests, write_report, ArtifactError};
pub use config::{require_token, ConfigError, ConfigFile, Repository, RunConfig, TOKEN_ENV_VAR};
pub use evaluate::{
    approval_from_reviews, check_review_approval, check_status_checks, checks_from_statuses,
    evaluate_pull_request, evaluate_pull_requests, ReportRow, Verdict,
};
pub use extract::{fetch_merged_pull_requests, Extraction, Interruption};
pub use github::{ApiError, GitHubApi, OctocrabApi};
pub use models::{
    Account, PullRequestRecord, ReviewRecord, ReviewState, StatusRecord, StatusState,
    GHOST_LOGIN,
};
pub use runner::{Runner, RunnerError, Stage};
pub use summary::RunSummary;
