//! Compliance evaluation of merged pull requests.
//!
//! For every pull request two independent lookups are made: its reviews and
//! its commit statuses. Each is reduced to a [`Verdict`]. Lookup failures are
//! logged and reported as [`Verdict::Unknown`]; they never stop the run.

mod report_row;
mod verdict;

pub use report_row::ReportRow;
pub use verdict::Verdict;

use crate::config::Repository;
use crate::github::GitHubApi;
use crate::models::{PullRequestRecord, ReviewRecord, StatusRecord};
use futures::stream::{self, StreamExt};
use tracing::{info, info_span, warn, Instrument};

/// Reduces a review list: passed iff at least one review approves.
#[must_use]
pub fn approval_from_reviews(reviews: &[ReviewRecord]) -> Verdict {
    Verdict::from_bool(reviews.iter().any(ReviewRecord::is_approval))
}

/// Reduces a status list: passed iff it is non-empty and every entry succeeded.
///
/// An empty list means nothing was verified, so it fails.
#[must_use]
pub fn checks_from_statuses(statuses: &[StatusRecord]) -> Verdict {
    Verdict::from_bool(!statuses.is_empty() && statuses.iter().all(StatusRecord::is_success))
}

/// Checks whether pull request `number` has at least one approving review.
pub async fn check_review_approval<A>(api: &A, repository: &Repository, number: u64) -> Verdict
where
    A: GitHubApi + ?Sized,
{
    match api.list_reviews(repository, number).await {
        Ok(reviews) => approval_from_reviews(&reviews),
        Err(e) => {
            warn!(pr_number = number, error = %e, "Reviews fetch failed");
            Verdict::Unknown
        }
    }
}

/// Checks whether every status at `statuses_url` reported success.
pub async fn check_status_checks<A>(api: &A, statuses_url: &str) -> Verdict
where
    A: GitHubApi + ?Sized,
{
    match api.list_statuses(statuses_url).await {
        Ok(statuses) => checks_from_statuses(&statuses),
        Err(e) => {
            warn!(statuses_url = %statuses_url, error = %e, "Status check fetch failed");
            Verdict::Unknown
        }
    }
}

/// Evaluates a single pull request. Both lookups always run.
pub async fn evaluate_pull_request<A>(
    api: &A,
    repository: &Repository,
    pull_request: &PullRequestRecord,
) -> ReportRow
where
    A: GitHubApi + ?Sized,
{
    info!(
        pr_number = pull_request.number,
        title = %pull_request.title,
        "Processing pull request"
    );

    let (review_approved, checks_passed) = futures::join!(
        check_review_approval(api, repository, pull_request.number),
        check_status_checks(api, &pull_request.statuses_url),
    );

    ReportRow::new(pull_request, review_approved, checks_passed)
}

/// Evaluates pull requests with at most `concurrency` in flight.
///
/// Returns exactly one row per input record, in input order.
pub async fn evaluate_pull_requests<A>(
    api: &A,
    repository: &Repository,
    pull_requests: &[PullRequestRecord],
    concurrency: usize,
) -> Vec<ReportRow>
where
    A: GitHubApi + ?Sized,
{
    let span = info_span!(
        "evaluate",
        repo = %repository,
        count = pull_requests.len()
    );

    async {
        let rows: Vec<ReportRow> = stream::iter(pull_requests)
            .map(|pull_request| evaluate_pull_request(api, repository, pull_request))
            .buffered(concurrency.max(1))
            .collect()
            .await;

        info!(rows = rows.len(), "Evaluation complete");
        rows
    }
    .instrument(span)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ReviewState, StatusState};

    #[test]
    fn any_approval_passes_review() {
        let reviews = [
            ReviewRecord::new(ReviewState::ChangesRequested),
            ReviewRecord::new(ReviewState::Approved),
            ReviewRecord::new(ReviewState::Dismissed),
        ];
        assert_eq!(approval_from_reviews(&reviews), Verdict::Passed);
    }

    #[test]
    fn no_approval_fails_review() {
        let reviews = [
            ReviewRecord::new(ReviewState::Commented),
            ReviewRecord::new(ReviewState::Pending),
        ];
        assert_eq!(approval_from_reviews(&reviews), Verdict::Failed);
        assert_eq!(approval_from_reviews(&[]), Verdict::Failed);
    }

    #[test]
    fn empty_status_list_fails_checks() {
        assert_eq!(checks_from_statuses(&[]), Verdict::Failed);
    }

    #[test]
    fn all_success_passes_checks() {
        let statuses = [
            StatusRecord::new(StatusState::Success),
            StatusRecord::new(StatusState::Success),
        ];
        assert_eq!(checks_from_statuses(&statuses), Verdict::Passed);
    }

    #[test]
    fn any_non_success_fails_checks() {
        for other in [
            StatusState::Failure,
            StatusState::Error,
            StatusState::Pending,
            StatusState::Other,
        ] {
            let statuses = [
                StatusRecord::new(StatusState::Success),
                StatusRecord::new(other),
            ];
            assert_eq!(checks_from_statuses(&statuses), Verdict::Failed);
        }
    }
}
