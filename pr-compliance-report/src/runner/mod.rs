//! Orchestrates the extract and evaluate stages.

mod error;
mod stage;

pub use error::RunnerError;
pub use stage::Stage;

use crate::artifact::{read_pull_requests, write_pull_requests, write_report};
use crate::config::{require_token, RunConfig};
use crate::evaluate::evaluate_pull_requests;
use crate::extract::fetch_merged_pull_requests;
use crate::github::{ApiError, GitHubApi, OctocrabApi};
use crate::summary::RunSummary;
use tracing::{info, warn};

/// Runs audit stages against one repository.
pub struct Runner<A> {
    config: RunConfig,
    api: A,
}

impl Runner<OctocrabApi> {
    /// Builds a runner backed by GitHub, authenticated with `token`.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] if the token is missing, the configuration is
    /// invalid, or the client cannot be built.
    pub fn connect(config: RunConfig, token: Option<String>) -> Result<Self, RunnerError> {
        Self::connect_with(config, token, |token, config| {
            OctocrabApi::new(token, config.api_base_url())
        })
    }
}

impl<A: GitHubApi> Runner<A> {
    /// Builds a runner over an existing API client.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Config`] if the configuration is invalid.
    pub fn new(config: RunConfig, api: A) -> Result<Self, RunnerError> {
        config.validate()?;
        Ok(Self { config, api })
    }

    /// Builds a runner, creating the API client with `connect`.
    ///
    /// The token is checked before anything else: when it is missing, `connect`
    /// is never called and no request can be made.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] if the token is missing, the configuration is
    /// invalid, or `connect` fails.
    pub fn connect_with<F>(
        config: RunConfig,
        token: Option<String>,
        connect: F,
    ) -> Result<Self, RunnerError>
    where
        F: FnOnce(&str, &RunConfig) -> Result<A, ApiError>,
    {
        let token = require_token(token)?;
        config.validate()?;
        let api = connect(&token, &config)?;
        Ok(Self { config, api })
    }

    /// Returns the run configuration.
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Returns the API client.
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Executes the requested stage(s).
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] if an artifact cannot be read or written.
    /// Per-request API failures do not abort the run.
    pub async fn run(&self, stage: Stage) -> Result<RunSummary, RunnerError> {
        let mut summary = RunSummary::new(stage);

        if stage.runs_extract() {
            self.extract(&mut summary).await?;
        }
        if stage.runs_evaluate() {
            self.evaluate(&mut summary).await?;
        }

        Ok(summary)
    }

    /// Fetches merged pull requests and overwrites the intermediate artifact.
    async fn extract(&self, summary: &mut RunSummary) -> Result<(), RunnerError> {
        let repository = self.config.repository();
        info!(repo = %repository, "Fetching merged pull requests");

        let extraction =
            fetch_merged_pull_requests(&self.api, repository, self.config.page_size()).await;

        if let Some(interruption) = &extraction.interruption {
            warn!(
                page = interruption.page,
                error = %interruption.error,
                "Pagination stopped early, artifact may be incomplete"
            );
        }

        let path = self.config.raw_path();
        write_pull_requests(path, &extraction.pull_requests)?;
        info!(
            count = extraction.pull_requests.len(),
            path = %path.display(),
            "Saved merged pull requests"
        );

        summary.record_extraction(&extraction);
        Ok(())
    }

    /// Evaluates the intermediate artifact and overwrites the report.
    async fn evaluate(&self, summary: &mut RunSummary) -> Result<(), RunnerError> {
        let path = self.config.raw_path();
        info!(path = %path.display(), "Loading pull request artifact");
        let pull_requests = read_pull_requests(path)?;

        if pull_requests.is_empty() {
            warn!("No merged pull requests to evaluate");
        }

        let rows = evaluate_pull_requests(
            &self.api,
            self.config.repository(),
            &pull_requests,
            self.config.concurrency(),
        )
        .await;

        let report_path = self.config.report_path();
        write_report(report_path, &rows)?;
        info!(path = %report_path.display(), rows = rows.len(), "Report generated");

        for row in &rows {
            summary.record_row(row);
        }
        Ok(())
    }
}
