//! Config file deserialization.

use serde::Deserialize;
use std::path::PathBuf;

/// Parsed contents of an optional `config.toml` file.
///
/// Every key is optional; unset keys keep the built-in defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ConfigFile {
    /// Repository owner (user or organization).
    pub owner: Option<String>,

    /// Repository name.
    pub repo: Option<String>,

    /// Pull requests requested per listing page.
    pub page_size: Option<u8>,

    /// Maximum pull requests evaluated concurrently.
    pub concurrency: Option<usize>,

    /// Path of the intermediate JSON artifact.
    pub raw_path: Option<PathBuf>,

    /// Path of the CSV report.
    pub report_path: Option<PathBuf>,

    /// Base URL of the GitHub REST API.
    pub api_base_url: Option<String>,
}
