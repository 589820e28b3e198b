//! Run artifacts: the intermediate pull request JSON and the CSV report.
//!
//! Both files are rewritten from scratch on every run; missing parent
//! directories are created.

mod error;

pub use error::ArtifactError;

use crate::evaluate::ReportRow;
use crate::models::PullRequestRecord;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Column names of the CSV report, in order.
pub const REPORT_COLUMNS: [&str; 6] = [
    "PR_Number",
    "Title",
    "Author",
    "Merged_At",
    "CR_Passed",
    "Checks_Passed",
];

/// Writes pull request records as a pretty-printed JSON array.
///
/// # Errors
///
/// Returns [`ArtifactError`] if the file cannot be created or written.
pub fn write_pull_requests(
    path: &Path,
    pull_requests: &[PullRequestRecord],
) -> Result<(), ArtifactError> {
    debug!(path = %path.display(), count = pull_requests.len(), "Writing pull request artifact");
    ensure_parent_dir(path)?;

    let file = File::create(path).map_err(|e| io_error(path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, pull_requests).map_err(|e| {
        ArtifactError::JsonError {
            path: path.display().to_string(),
            source: e,
        }
    })?;
    writer.flush().map_err(|e| io_error(path, e))
}

/// Reads pull request records written by [`write_pull_requests`].
///
/// # Errors
///
/// Returns [`ArtifactError`] if the file is missing or is not a JSON array of
/// pull request objects.
pub fn read_pull_requests(path: &Path) -> Result<Vec<PullRequestRecord>, ArtifactError> {
    debug!(path = %path.display(), "Reading pull request artifact");

    let file = File::open(path).map_err(|e| io_error(path, e))?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| ArtifactError::JsonError {
        path: path.display().to_string(),
        source: e,
    })
}

/// Writes the CSV report: a header row, then one row per entry of `rows`.
///
/// # Errors
///
/// Returns [`ArtifactError`] if the file cannot be created or written.
pub fn write_report(path: &Path, rows: &[ReportRow]) -> Result<(), ArtifactError> {
    debug!(path = %path.display(), count = rows.len(), "Writing report");
    ensure_parent_dir(path)?;

    let csv_error = |e: csv::Error| ArtifactError::CsvError {
        path: path.display().to_string(),
        source: e,
    };

    // Header is written by hand so an empty report still has one.
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(csv_error)?;
    writer.write_record(REPORT_COLUMNS).map_err(csv_error)?;
    for row in rows {
        writer.serialize(row).map_err(csv_error)?;
    }
    writer.flush().map_err(|e| io_error(path, e))
}

fn ensure_parent_dir(path: &Path) -> Result<(), ArtifactError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            std::fs::create_dir_all(parent).map_err(|e| io_error(parent, e))
        }
        _ => Ok(()),
    }
}

fn io_error(path: &Path, source: std::io::Error) -> ArtifactError {
    ArtifactError::IoError {
        path: path.display().to_string(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluate::Verdict;
    use chrono::{TimeZone, Utc};
    use std::fs;
    use tempfile::TempDir;

    fn sample_pull_request(number: u64) -> PullRequestRecord {
        PullRequestRecord::new(
            number,
            format!("Change {number}"),
            "octocat",
            Some(Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap()),
            format!("https://api.github.com/repos/o/r/statuses/{number}"),
        )
    }

    #[test]
    fn pull_request_artifact_survives_a_rewrite() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("data/raw/prs_raw.json");

        write_pull_requests(&path, &[sample_pull_request(1), sample_pull_request(2)]).unwrap();
        write_pull_requests(&path, &[sample_pull_request(3)]).unwrap();

        let records = read_pull_requests(&path).unwrap();
        assert_eq!(records, vec![sample_pull_request(3)]);

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("[\n  {"), "artifact should be pretty-printed");
    }

    #[test]
    fn read_rejects_non_array() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("prs.json");
        fs::write(&path, r#"{"number": 1}"#).unwrap();

        assert!(matches!(
            read_pull_requests(&path),
            Err(ArtifactError::JsonError { .. })
        ));
    }

    #[test]
    fn read_missing_file() {
        let temp = TempDir::new().unwrap();

        assert!(matches!(
            read_pull_requests(&temp.path().join("missing.json")),
            Err(ArtifactError::IoError { .. })
        ));
    }

    #[test]
    fn report_has_header_and_quoted_titles() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out/report.csv");
        let mut pr = sample_pull_request(7);
        pr.title = "Fix, then \"ship\"".to_string();

        let rows = vec![ReportRow::new(&pr, Verdict::Passed, Verdict::Unknown)];
        write_report(&path, &rows).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            "PR_Number,Title,Author,Merged_At,CR_Passed,Checks_Passed"
        );
        assert_eq!(
            lines[1],
            r#"7,"Fix, then ""ship""",octocat,2024-03-01T12:30:00Z,True,Unknown"#
        );
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn empty_report_still_has_header() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("report.csv");

        write_report(&path, &[]).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "PR_Number,Title,Author,Merged_At,CR_Passed,Checks_Passed\n"
        );
    }

    #[test]
    fn report_columns_match_row_field_names() {
        let mut buffer = Vec::new();
        let mut writer = csv::WriterBuilder::new()
            .has_headers(true)
            .from_writer(&mut buffer);
        let row = ReportRow::new(&sample_pull_request(1), Verdict::Passed, Verdict::Failed);
        writer.serialize(&row).unwrap();
        writer.flush().unwrap();
        drop(writer);

        let text = String::from_utf8(buffer).unwrap();
        let header = text.lines().next().unwrap();

        assert_eq!(header, REPORT_COLUMNS.join(","));
    }
}
