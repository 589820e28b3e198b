//! Read-only access to the GitHub REST API.
//!
//! The audit talks to GitHub through the [`GitHubApi`] trait so the extractor
//! and evaluator can run against any implementation. [`OctocrabApi`] is the
//! production implementation.

mod client;
mod error;

pub use client::OctocrabApi;
pub use error::ApiError;

use crate::config::Repository;
use crate::models::{PullRequestRecord, ReviewRecord, StatusRecord};
use async_trait::async_trait;

/// The three GitHub endpoints the audit consumes.
#[async_trait]
pub trait GitHubApi: Send + Sync {
    /// Fetches one page of `GET /repos/{owner}/{repo}/pulls?state=closed`.
    ///
    /// Pages are numbered from 1. An empty vector marks the end of the listing.
    async fn list_closed_pull_requests(
        &self,
        repository: &Repository,
        page_size: u8,
        page: u32,
    ) -> Result<Vec<PullRequestRecord>, ApiError>;

    /// Fetches `GET /repos/{owner}/{repo}/pulls/{number}/reviews`.
    async fn list_reviews(
        &self,
        repository: &Repository,
        number: u64,
    ) -> Result<Vec<ReviewRecord>, ApiError>;

    /// Fetches the statuses at a pull request's `statuses_url`.
    async fn list_statuses(&self, statuses_url: &str) -> Result<Vec<StatusRecord>, ApiError>;
}
