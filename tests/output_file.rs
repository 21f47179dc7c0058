// tests/output_file.rs
//
// `--output file`: results/<mode>_<timestamp>.<ext>, rows in report order.
//
use std::fs;

use chrono::NaiveDate;
use docs_scrape::config::options::{AppOptions, FileFormat, OutputMode, ParserMode};
use docs_scrape::output::{control_output, file_output};
use docs_scrape::report::{status_report, Report, StatusTally};
use docs_scrape::status::ExpectedStatusTable;

fn now() -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 18).unwrap().and_hms_opt(12, 0, 0).unwrap()
}

#[test]
fn file_starts_with_header_and_ends_with_total() {
    let dir = tempfile::tempdir().unwrap();
    let tally = StatusTally::default().increment("Final").increment("Final");
    let report = status_report(&tally, &ExpectedStatusTable::standard());

    let path = file_output(&report, ParserMode::Pep, FileFormat::Csv, &dir.path().join("results"), now()).unwrap();
    assert_eq!(path, dir.path().join("results").join("pep_2026-10-18_12-00-00.csv"));

    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines, vec![r#""Status","Count""#, r#""Final","2""#, r#""Total","2""#]);
}

#[test]
fn tsv_uses_tab_delimiter() {
    let dir = tempfile::tempdir().unwrap();
    let report = Report::new(
        vec!["Documentation link".into(), "Version".into(), "Status".into()],
        vec![vec!["https://docs.python.org/3.13/".into(), "3.13".into(), "stable".into()]],
    );
    let mut opts = AppOptions::new(ParserMode::LatestVersions).with_base_dir(dir.path());
    opts.output = OutputMode::File;
    opts.format = FileFormat::Tsv;

    let path = control_output(&report, &opts, now()).unwrap().unwrap();
    assert_eq!(path.extension().unwrap(), "tsv");
    assert!(path.starts_with(opts.results_dir()));

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text.lines().next().unwrap(), "\"Documentation link\"\t\"Version\"\t\"Status\"");
    assert_eq!(text.lines().count(), 2);
}

#[test]
fn console_modes_write_no_file() {
    let dir = tempfile::tempdir().unwrap();
    let report = Report::new(vec!["Status".into(), "Count".into()], vec![vec!["Total".into(), "0".into()]]);
    let opts = AppOptions::new(ParserMode::Pep).with_base_dir(dir.path());

    assert_eq!(control_output(&report, &opts, now()).unwrap(), None);
    assert!(!opts.results_dir().exists());
}
