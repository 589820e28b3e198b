//! Extraction of merged pull requests.
//!
//! Pages through the closed pull request listing of one repository and keeps
//! the pull requests that were merged.

mod extraction;

pub use extraction::{Extraction, Interruption};

use crate::config::Repository;
use crate::github::GitHubApi;
use crate::models::PullRequestRecord;
use tracing::{error, info, info_span, Instrument};

/// Fetches every merged pull request of `repository`.
///
/// Pages are requested from 1 upwards until a page comes back empty. A failed
/// page request ends pagination as well: the pull requests gathered so far are
/// returned and the failure is recorded in [`Extraction::interruption`].
/// Records are not deduplicated.
///
/// # Arguments
///
/// * `api` - GitHub API client
/// * `repository` - Repository to list
/// * `page_size` - Pull requests per page (1 to 100)
pub async fn fetch_merged_pull_requests<A>(
    api: &A,
    repository: &Repository,
    page_size: u8,
) -> Extraction
where
    A: GitHubApi + ?Sized,
{
    let span = info_span!("extract", repo = %repository, page_size);

    async {
        info!("Fetching merged pull requests");
        let mut extraction = Extraction::default();
        let mut page: u32 = 1;

        loop {
            extraction.pages_requested += 1;

            let pull_requests = match api
                .list_closed_pull_requests(repository, page_size, page)
                .await
            {
                Ok(pull_requests) => pull_requests,
                Err(e) => {
                    error!(page, error = %e, "GitHub API error, stopping pagination");
                    extraction.interruption = Some(Interruption {
                        page,
                        error: e.to_string(),
                    });
                    break;
                }
            };

            if pull_requests.is_empty() {
                break;
            }

            let merged: Vec<PullRequestRecord> = pull_requests
                .into_iter()
                .filter(PullRequestRecord::is_merged)
                .collect();
            info!(page, merged = merged.len(), "Fetched page");

            extraction.pull_requests.extend(merged);
            page += 1;
        }

        info!(
            count = extraction.pull_requests.len(),
            pages = extraction.pages_requested,
            partial = extraction.is_partial(),
            "Extraction complete"
        );
        extraction
    }
    .instrument(span)
    .await
}
