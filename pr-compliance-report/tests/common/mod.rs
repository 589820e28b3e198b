//! In-memory GitHub API used by the integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use pr_compliance_report::{
    ApiError, GitHubApi, PullRequestRecord, Repository, ReviewRecord, ReviewState, StatusRecord,
    StatusState,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// Canned responses keyed by request, with request accounting.
#[derive(Default)]
pub struct FakeApi {
    pages: Vec<Result<Vec<PullRequestRecord>, u16>>,
    reviews: HashMap<u64, Result<Vec<ReviewRecord>, u16>>,
    statuses: HashMap<String, Result<Vec<StatusRecord>, u16>>,
    review_delays: HashMap<u64, Duration>,
    requests: AtomicUsize,
    page_requests: Mutex<Vec<(String, u8, u32)>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a listing page. Pages past the last one configured are empty.
    pub fn with_page(mut self, pull_requests: Vec<PullRequestRecord>) -> Self {
        self.pages.push(Ok(pull_requests));
        self
    }

    pub fn with_failed_page(mut self, status: u16) -> Self {
        self.pages.push(Err(status));
        self
    }

    pub fn with_reviews(mut self, number: u64, states: &[ReviewState]) -> Self {
        let reviews = states.iter().copied().map(ReviewRecord::new).collect();
        self.reviews.insert(number, Ok(reviews));
        self
    }

    pub fn with_failed_reviews(mut self, number: u64, status: u16) -> Self {
        self.reviews.insert(number, Err(status));
        self
    }

    pub fn with_review_delay(mut self, number: u64, millis: u64) -> Self {
        self.review_delays
            .insert(number, Duration::from_millis(millis));
        self
    }

    pub fn with_statuses(mut self, url: &str, states: &[StatusState]) -> Self {
        let statuses = states.iter().copied().map(StatusRecord::new).collect();
        self.statuses.insert(url.to_string(), Ok(statuses));
        self
    }

    pub fn with_failed_statuses(mut self, url: &str, status: u16) -> Self {
        self.statuses.insert(url.to_string(), Err(status));
        self
    }

    /// Total number of requests served.
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    /// `(owner/name, page_size, page)` of every listing request, in order.
    pub fn page_requests(&self) -> Vec<(String, u8, u32)> {
        self.page_requests.lock().unwrap().clone()
    }

    /// Highest number of review requests observed in flight at once.
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

fn rejected(status: u16) -> ApiError {
    ApiError::Http {
        status,
        message: "fake failure".to_string(),
    }
}

#[async_trait]
impl GitHubApi for FakeApi {
    async fn list_closed_pull_requests(
        &self,
        repository: &Repository,
        page_size: u8,
        page: u32,
    ) -> Result<Vec<PullRequestRecord>, ApiError> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        self.page_requests
            .lock()
            .unwrap()
            .push((repository.full_name(), page_size, page));

        match self.pages.get(page as usize - 1) {
            Some(Ok(pull_requests)) => Ok(pull_requests.clone()),
            Some(Err(status)) => Err(rejected(*status)),
            None => Ok(Vec::new()),
        }
    }

    async fn list_reviews(
        &self,
        _repository: &Repository,
        number: u64,
    ) -> Result<Vec<ReviewRecord>, ApiError> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        if let Some(delay) = self.review_delays.get(&number) {
            tokio::time::sleep(*delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        match self.reviews.get(&number) {
            Some(Ok(reviews)) => Ok(reviews.clone()),
            Some(Err(status)) => Err(rejected(*status)),
            None => Ok(Vec::new()),
        }
    }

    async fn list_statuses(&self, statuses_url: &str) -> Result<Vec<StatusRecord>, ApiError> {
        self.requests.fetch_add(1, Ordering::SeqCst);

        match self.statuses.get(statuses_url) {
            Some(Ok(statuses)) => Ok(statuses.clone()),
            Some(Err(status)) => Err(rejected(*status)),
            None => Ok(Vec::new()),
        }
    }
}

pub fn repository() -> Repository {
    Repository::new("acme", "widgets")
}

pub fn statuses_url(number: u64) -> String {
    format!("https://api.github.com/repos/acme/widgets/statuses/sha{number}")
}

/// A merged pull request.
pub fn merged(number: u64) -> PullRequestRecord {
    PullRequestRecord::new(
        number,
        format!("Change {number}"),
        "octocat",
        Some(Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap()),
        statuses_url(number),
    )
}

/// A pull request closed without merging.
pub fn unmerged(number: u64) -> PullRequestRecord {
    PullRequestRecord::new(
        number,
        format!("Abandoned {number}"),
        "octocat",
        None,
        statuses_url(number),
    )
}

/// A page of `count` merged pull requests numbered from `first`.
pub fn merged_page(first: u64, count: u64) -> Vec<PullRequestRecord> {
    (first..first + count).map(merged).collect()
}
