//! Octocrab-backed GitHub API client.

use crate::config::Repository;
use crate::github::{ApiError, GitHubApi};
use crate::models::{PullRequestRecord, ReviewRecord, StatusRecord};
use async_trait::async_trait;
use octocrab::Octocrab;
use serde::Serialize;
use tracing::debug;
use url::Url;

/// Query parameters of the pull request listing.
#[derive(Debug, Serialize)]
struct ListParams {
    state: &'static str,
    per_page: u8,
    page: u32,
}

/// [`GitHubApi`] implementation backed by an authenticated [`Octocrab`] client.
#[derive(Clone)]
pub struct OctocrabApi {
    octocrab: Octocrab,
    /// Path prefix of the API base URL, without trailing slash (empty on github.com).
    base_path: String,
}

impl OctocrabApi {
    /// Builds a client authenticated with `token` against `api_base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the base URL is invalid or the client cannot be built.
    pub fn new(token: &str, api_base_url: &str) -> Result<Self, ApiError> {
        let base = Url::parse(api_base_url).map_err(|e| ApiError::InvalidUrl {
            url: api_base_url.to_string(),
            source: e,
        })?;

        let octocrab = Octocrab::builder()
            .personal_token(token.to_string())
            .base_uri(api_base_url)?
            .build()?;

        Ok(Self {
            octocrab,
            base_path: base.path().trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl GitHubApi for OctocrabApi {
    async fn list_closed_pull_requests(
        &self,
        repository: &Repository,
        page_size: u8,
        page: u32,
    ) -> Result<Vec<PullRequestRecord>, ApiError> {
        let route = format!("/repos/{}/{}/pulls", repository.owner, repository.name);
        let params = ListParams {
            state: "closed",
            per_page: page_size,
            page,
        };
        debug!(route = %route, page, page_size, "Requesting pull request page");
        Ok(self.octocrab.get(route, Some(&params)).await?)
    }

    async fn list_reviews(
        &self,
        repository: &Repository,
        number: u64,
    ) -> Result<Vec<ReviewRecord>, ApiError> {
        let route = format!(
            "/repos/{}/{}/pulls/{number}/reviews",
            repository.owner, repository.name
        );
        debug!(route = %route, "Requesting reviews");
        Ok(self.octocrab.get(route, None::<&()>).await?)
    }

    async fn list_statuses(&self, statuses_url: &str) -> Result<Vec<StatusRecord>, ApiError> {
        let route = relative_route(statuses_url, &self.base_path)?;
        debug!(route = %route, "Requesting statuses");
        Ok(self.octocrab.get(route, None::<&()>).await?)
    }
}

/// Turns an absolute API locator into a route relative to the API base.
///
/// The locator's host is dropped; its path and query are kept. When the API
/// base has a path prefix (GitHub Enterprise serves under `/api/v3`) that
/// prefix is removed so the client does not apply it twice.
fn relative_route(locator: &str, base_path: &str) -> Result<String, ApiError> {
    let url = Url::parse(locator).map_err(|e| ApiError::InvalidUrl {
        url: locator.to_string(),
        source: e,
    })?;

    let path = url.path();
    let path = match path.strip_prefix(base_path) {
        Some(rest) if !base_path.is_empty() && rest.starts_with('/') => rest,
        _ => path,
    };

    Ok(match url.query() {
        Some(query) => format!("{path}?{query}"),
        None => path.to_string(),
    })
}
