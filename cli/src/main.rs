//! CLI for the PR Compliance Report.
//!
//! This tool fetches the merged pull requests of a GitHub repository and
//! reports whether each one was approved and passed its status checks.

use clap::{Parser, ValueEnum};
use pr_compliance_report::{
    OctocrabApi, RunConfig, RunSummary, Runner, RunnerError, Stage, TOKEN_ENV_VAR,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// PR Compliance Report - Audit merged pull requests for approvals and passing checks.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Pipeline stage to run.
    #[arg(value_enum, default_value_t = StageArg::All)]
    stage: StageArg,

    /// Path to a TOML config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Repository owner (user or organization).
    #[arg(long)]
    owner: Option<String>,

    /// Repository name.
    #[arg(long)]
    repo: Option<String>,

    /// Pull requests per listing page (1-100).
    #[arg(long)]
    page_size: Option<u8>,

    /// Maximum pull requests evaluated concurrently.
    #[arg(long)]
    concurrency: Option<usize>,

    /// Path of the intermediate JSON artifact.
    #[arg(long)]
    raw_path: Option<PathBuf>,

    /// Path of the CSV report.
    #[arg(long)]
    report_path: Option<PathBuf>,

    /// GitHub REST API base URL.
    #[arg(long)]
    api_base_url: Option<String>,

    /// GitHub Personal Access Token.
    #[arg(long, env = TOKEN_ENV_VAR, hide_env_values = true)]
    token: Option<String>,
}

/// Command-line names of the pipeline stages.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum StageArg {
    /// Fetch merged pull requests into the intermediate artifact.
    Extract,
    /// Build the report from the intermediate artifact.
    Evaluate,
    /// Extract, then evaluate.
    All,
}

impl From<StageArg> for Stage {
    fn from(stage: StageArg) -> Self {
        match stage {
            StageArg::Extract => Stage::Extract,
            StageArg::Evaluate => Stage::Evaluate,
            StageArg::All => Stage::All,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    // Parse arguments
    let args = Args::parse();

    // Run the main logic
    match run(args).await {
        Ok(summary) => {
            print_summary(&summary);

            if summary.extraction_partial {
                warn!("Extraction was interrupted, the report may be incomplete");
            }
            if summary.has_unknowns() {
                warn!("Some lookups failed, affected report cells read Unknown");
            }
            ExitCode::from(0)
        }
        Err(e) => {
            error!(error = %e, "Critical failure");
            ExitCode::from(2)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output)
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Assembles the configuration: defaults, then config file, then flags.
fn build_config(args: &Args) -> Result<RunConfig, RunnerError> {
    let mut config = match &args.config {
        Some(path) => RunConfig::load(path)?,
        None => RunConfig::default(),
    };

    if let Some(owner) = &args.owner {
        config = config.with_owner(owner.clone());
    }
    if let Some(repo) = &args.repo {
        config = config.with_repo(repo.clone());
    }
    if let Some(page_size) = args.page_size {
        config = config.with_page_size(page_size);
    }
    if let Some(concurrency) = args.concurrency {
        config = config.with_concurrency(concurrency);
    }
    if let Some(raw_path) = &args.raw_path {
        config = config.with_raw_path(raw_path.clone());
    }
    if let Some(report_path) = &args.report_path {
        config = config.with_report_path(report_path.clone());
    }
    if let Some(api_base_url) = &args.api_base_url {
        config = config.with_api_base_url(api_base_url.clone());
    }

    Ok(config)
}

/// Main execution logic.
async fn run(args: Args) -> Result<RunSummary, RunnerError> {
    let config = build_config(&args)?;
    let runner = Runner::<OctocrabApi>::connect(config, args.token)?;
    runner.run(args.stage.into()).await
}

/// Prints the final run summary.
fn print_summary(summary: &RunSummary) {
    println!("\nSummary:");
    println!("  Stage: {}", summary.stage);

    if summary.stage.runs_extract() {
        println!("  Pages requested: {}", summary.pages_requested);
        println!(
            "  Merged PRs extracted: {}{}",
            summary.pull_requests_extracted,
            if summary.extraction_partial {
                " (partial)"
            } else {
                ""
            }
        );
    }

    if summary.stage.runs_evaluate() {
        println!("  Report rows: {}", summary.rows_written);
        println!(
            "  Approved: {} ({} unknown)",
            summary.reviews_approved, summary.reviews_unknown
        );
        println!(
            "  Checks passed: {} ({} unknown)",
            summary.checks_passed, summary.checks_unknown
        );
        println!(
            "  Fully compliant: {}",
            if summary.fully_compliant() {
                "yes"
            } else {
                "no"
            }
        );
    }
}
