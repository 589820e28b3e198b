//! Run configuration.
//!
//! A [`RunConfig`] is assembled once per run from built-in defaults, an
//! optional `config.toml` file and command-line overrides, then passed
//! explicitly to every stage.

mod credentials;
mod error;
mod file;
mod repository;

pub use credentials::{require_token, TOKEN_ENV_VAR};
pub use error::ConfigError;
pub use file::ConfigFile;
pub use repository::Repository;

use std::path::{Path, PathBuf};
use tracing::debug;
use url::Url;

/// Repository owner audited when none is configured.
pub const DEFAULT_OWNER: &str = "Scytale-exercise";

/// Repository name audited when none is configured.
pub const DEFAULT_REPO: &str = "scytale-repo3";

/// Largest page size accepted by the pull request listing endpoint.
pub const MAX_PAGE_SIZE: u8 = 100;

/// Default maximum number of pull requests evaluated concurrently.
pub const DEFAULT_CONCURRENCY: usize = 5;

/// Default location of the intermediate JSON artifact.
pub const DEFAULT_RAW_PATH: &str = "data/raw/prs_raw.json";

/// Default location of the CSV report.
pub const DEFAULT_REPORT_PATH: &str = "data/output/report.csv";

/// Default GitHub REST API base URL.
pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";

/// Configuration for a single audit run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Repository to audit.
    repository: Repository,
    /// Pull requests requested per listing page.
    page_size: u8,
    /// Maximum pull requests evaluated concurrently.
    concurrency: usize,
    /// Path of the intermediate JSON artifact.
    raw_path: PathBuf,
    /// Path of the CSV report.
    report_path: PathBuf,
    /// Base URL of the GitHub REST API.
    api_base_url: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::new(Repository::new(DEFAULT_OWNER, DEFAULT_REPO))
    }
}

impl RunConfig {
    /// Creates a configuration for the given repository with default settings.
    pub fn new(repository: Repository) -> Self {
        Self {
            repository,
            page_size: MAX_PAGE_SIZE,
            concurrency: DEFAULT_CONCURRENCY,
            raw_path: PathBuf::from(DEFAULT_RAW_PATH),
            report_path: PathBuf::from(DEFAULT_REPORT_PATH),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }

    /// Loads a configuration from a TOML file, on top of the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!(path = %path.display(), "Loading config file");

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        let file: ConfigFile = toml::from_str(&content).map_err(|e| ConfigError::TomlError {
            path: path.display().to_string(),
            source: e,
        })?;

        Ok(Self::default().merge(file))
    }

    /// Overlays every setting present in `file` onto this configuration.
    #[must_use]
    pub fn merge(mut self, file: ConfigFile) -> Self {
        if let Some(owner) = file.owner {
            self.repository.owner = owner;
        }
        if let Some(repo) = file.repo {
            self.repository.name = repo;
        }
        if let Some(page_size) = file.page_size {
            self.page_size = page_size;
        }
        if let Some(concurrency) = file.concurrency {
            self.concurrency = concurrency;
        }
        if let Some(raw_path) = file.raw_path {
            self.raw_path = raw_path;
        }
        if let Some(report_path) = file.report_path {
            self.report_path = report_path;
        }
        if let Some(api_base_url) = file.api_base_url {
            self.api_base_url = api_base_url;
        }
        self
    }

    /// Sets the repository owner.
    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.repository.owner = owner.into();
        self
    }

    /// Sets the repository name.
    pub fn with_repo(mut self, repo: impl Into<String>) -> Self {
        self.repository.name = repo.into();
        self
    }

    /// Sets the listing page size.
    pub fn with_page_size(mut self, page_size: u8) -> Self {
        self.page_size = page_size;
        self
    }

    /// Sets the evaluation concurrency.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }

    /// Sets the intermediate artifact path.
    pub fn with_raw_path(mut self, raw_path: PathBuf) -> Self {
        self.raw_path = raw_path;
        self
    }

    /// Sets the CSV report path.
    pub fn with_report_path(mut self, report_path: PathBuf) -> Self {
        self.report_path = report_path;
        self
    }

    /// Sets the GitHub REST API base URL.
    pub fn with_api_base_url(mut self, api_base_url: impl Into<String>) -> Self {
        self.api_base_url = api_base_url.into();
        self
    }

    /// Checks every setting against its accepted range.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] naming the first invalid setting.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.repository.owner.trim().is_empty() {
            return Err(invalid("owner", "must not be empty"));
        }
        if self.repository.name.trim().is_empty() {
            return Err(invalid("repo", "must not be empty"));
        }
        if self.page_size == 0 || self.page_size > MAX_PAGE_SIZE {
            return Err(invalid(
                "page-size",
                &format!("must be between 1 and {MAX_PAGE_SIZE}, got {}", self.page_size),
            ));
        }
        if self.concurrency == 0 {
            return Err(invalid("concurrency", "must be at least 1"));
        }
        match Url::parse(&self.api_base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(url) => {
                return Err(invalid(
                    "api-base-url",
                    &format!("unsupported scheme '{}'", url.scheme()),
                ))
            }
            Err(e) => return Err(invalid("api-base-url", &e.to_string())),
        }
        Ok(())
    }

    /// Returns the repository to audit.
    pub fn repository(&self) -> &Repository {
        &self.repository
    }

    /// Returns the listing page size.
    pub fn page_size(&self) -> u8 {
        self.page_size
    }

    /// Returns the evaluation concurrency.
    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// Returns the intermediate artifact path.
    pub fn raw_path(&self) -> &Path {
        &self.raw_path
    }

    /// Returns the CSV report path.
    pub fn report_path(&self) -> &Path {
        &self.report_path
    }

    /// Returns the GitHub REST API base URL.
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationError {
        field: field.to_string(),
        message: message.to_string(),
    }
}
