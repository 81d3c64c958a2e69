// tests/runner.rs
use std::fs;
use std::path::Path;

use course_analyzer::config::options::{AppOptions, OutputOptions, PathOptions};
use course_analyzer::error::AnalyzeError;
use course_analyzer::progress::Progress;
use course_analyzer::runner;

const INPUT: &str = r#"{
    "01005": {
        "name": "Matematik 1",
        "grades": [{ "timestamp": "V23", "participants": 100, "pass_percentage": 85, "avg": 6.5 }]
    },
    "02101": {
        "name": "Programmering",
        "grades": [{ "timestamp": "V23", "participants": 80, "pass_percentage": 92, "avg": 8.0 }]
    }
}"#;

fn options(root: &Path, input: &str) -> AppOptions {
    fs::create_dir_all(root.join("data")).unwrap();
    fs::write(root.join("data/coursedic.json"), input).unwrap();
    AppOptions {
        paths: PathOptions::rooted_at(root),
        output: OutputOptions::rooted_at(root),
        ..AppOptions::default()
    }
}

#[derive(Default)]
struct Recorder {
    total: usize,
    steps: Vec<String>,
    finished: bool,
}

impl Progress for Recorder {
    fn begin(&mut self, total: usize) { self.total = total; }
    fn item_done(&mut self, step: &str) { self.steps.push(step.to_string()); }
    fn finish(&mut self) { self.finished = true; }
}

#[test]
fn full_run_writes_extension() {
    let dir = tempfile::tempdir().unwrap();
    let opts = options(dir.path(), INPUT);
    let mut rec = Recorder::default();

    let summary = runner::run(&opts, Some(&mut rec)).unwrap();
    assert_eq!(summary.courses_loaded, 2);
    assert_eq!(summary.courses_analyzed, 2);
    assert_eq!(summary.files_written.len(), 4);
    assert!(opts.output.data_js().is_file());

    assert_eq!(rec.total, 4);
    assert_eq!(rec.steps, ["load", "validate", "analyze", "write"]);
    assert!(rec.finished);
}

#[test]
fn validate_only_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let mut opts = options(dir.path(), INPUT);
    opts.validate_only = true;

    let summary = runner::run(&opts, None).unwrap();
    assert_eq!(summary.courses_analyzed, 0);
    assert!(summary.files_written.is_empty());
    assert!(summary.validation.passed);
    assert!(!opts.output.data_js().exists());
}

#[test]
fn strict_mode_stops_on_validation_errors() {
    let dir = tempfile::tempdir().unwrap();
    let mut opts = options(dir.path(), "{}");
    opts.strict = true;

    let err = runner::run(&opts, None).unwrap_err();
    assert!(matches!(err, AnalyzeError::Validation { ref errors } if errors.len() == 1));
    assert!(!opts.output.data_js().exists());
}

#[test]
fn lenient_mode_continues_past_validation_errors() {
    let dir = tempfile::tempdir().unwrap();
    let opts = options(dir.path(), "{}");

    let summary = runner::run(&opts, None).unwrap();
    assert!(!summary.validation.passed);
    assert_eq!(summary.courses_analyzed, 0);
    assert!(opts.output.data_js().is_file());
}

#[test]
fn analyze_keeps_the_table_in_memory() {
    let dir = tempfile::tempdir().unwrap();
    let opts = options(dir.path(), INPUT);

    let analysis = runner::analyze(&opts, None).unwrap();
    assert_eq!(analysis.table.get("02101").unwrap().pp, Some(100.0));
    assert!(!opts.output.data_js().exists());
}
