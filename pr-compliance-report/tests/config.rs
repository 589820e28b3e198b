use std::path::{Path, PathBuf};

use pr_compliance_report::{read_pull_requests, Repository, RunConfig};

fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

#[test]
fn load_config_from_fixture() {
    let config = RunConfig::load(&fixtures_root().join("config.toml")).unwrap();

    assert_eq!(config.repository(), &Repository::new("acme", "widgets"));
    assert_eq!(config.page_size(), 50);
    assert_eq!(config.concurrency(), 8);
    assert_eq!(config.raw_path(), Path::new("out/raw/prs.json"));
    assert_eq!(config.report_path(), Path::new("out/report.csv"));
    assert_eq!(config.api_base_url(), "https://ghe.example.com/api/v3");
    assert!(config.validate().is_ok());
}

#[test]
fn read_artifact_fixture() {
    let records = read_pull_requests(&fixtures_root().join("prs_raw.json")).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].number, 42);
    assert_eq!(records[0].author(), "hubot");
    assert_eq!(records[0].merged_at_display(), "2024-05-02T17:45:10Z");
    assert_eq!(
        records[0].extra.get("html_url").and_then(|v| v.as_str()),
        Some("https://github.com/acme/widgets/pull/42")
    );
    assert_eq!(records[1].title, "Bump dependencies, refresh lockfile");
}
