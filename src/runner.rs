// src/runner.rs
use std::path::PathBuf;

use serde_json::Value;

use crate::analysis::{process_courses, MetricsTable};
use crate::config::options::AppOptions;
use crate::data::CourseCatalog;
use crate::error::{AnalyzeError, Result};
use crate::file::write_extension;
use crate::progress::Progress;
use crate::store::load_raw;
use crate::validate::{CourseDataValidator, ValidationSummary};

/// Summary of what a full run produced.
#[derive(Debug)]
pub struct RunSummary {
    pub courses_loaded: usize,
    /// Courses left in the output; 0 when only validating.
    pub courses_analyzed: usize,
    pub validation: ValidationSummary,
    pub files_written: Vec<PathBuf>,
}

/// Result of load + validate + analyze, without writing anything.
#[derive(Debug)]
pub struct Analysis {
    pub courses_loaded: usize,
    pub validation: ValidationSummary,
    pub table: MetricsTable,
}

/// Top-level runner: load, validate, analyze and write the extension files.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(opts: &AppOptions, mut progress: Option<&mut dyn Progress>) -> Result<RunSummary> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(if opts.validate_only { 2 } else { 4 });
    }
    let result = run_steps(opts, &mut progress);
    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    result
}

/// Load, validate and analyze; used by the GUI, which writes on demand.
pub fn analyze(opts: &AppOptions, mut progress: Option<&mut dyn Progress>) -> Result<Analysis> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(3);
    }
    let result = analyze_steps(opts, &mut progress);
    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    result
}

fn run_steps(opts: &AppOptions, progress: &mut Option<&mut dyn Progress>) -> Result<RunSummary> {
    if opts.validate_only {
        let raw = load_step(opts, progress)?;
        let validation = validate_step(&raw, opts.strict, progress)?;
        return Ok(RunSummary {
            courses_loaded: validation.total_courses,
            courses_analyzed: 0,
            validation,
            files_written: Vec::new(),
        });
    }

    let Analysis { courses_loaded, validation, table } = analyze_steps(opts, progress)?;

    let files_written = write_extension(&table, &opts.output)?;
    report(progress, "write", &format!("Wrote {} files", files_written.len()));
    logf!("Analysis complete!");

    Ok(RunSummary {
        courses_loaded,
        courses_analyzed: table.len(),
        validation,
        files_written,
    })
}

fn analyze_steps(opts: &AppOptions, progress: &mut Option<&mut dyn Progress>) -> Result<Analysis> {
    let raw = load_step(opts, progress)?;
    let courses_loaded = raw.as_object().map_or(0, |m| m.len());
    let validation = validate_step(&raw, opts.strict, progress)?;

    let catalog = CourseCatalog::from_value(raw)?;
    let table = process_courses(&catalog)?;
    report(progress, "analyze", &format!("Analyzed {} courses", table.len()));

    Ok(Analysis { courses_loaded, validation, table })
}

fn load_step(opts: &AppOptions, progress: &mut Option<&mut dyn Progress>) -> Result<Value> {
    let input = opts.paths.course_data_file();
    let raw = load_raw(&input).inspect_err(|e| loge!("{}", e))?;
    let count = raw.as_object().map_or(0, |m| m.len());
    logf!("Loaded {} courses from {}", count, input.display());
    report(progress, "load", &format!("Loaded {} courses", count));
    Ok(raw)
}

fn validate_step(raw: &Value, strict: bool, progress: &mut Option<&mut dyn Progress>) -> Result<ValidationSummary> {
    let mut validator = CourseDataValidator::new(raw);
    let passed = validator.validate();
    let summary = validator.summary();

    if !passed {
        if strict {
            return Err(AnalyzeError::Validation { errors: summary.errors });
        }
        logw!("Validation found {} errors; continuing", summary.error_count);
    }
    report(
        progress,
        "validate",
        &format!("Validation: {} errors, {} warnings", summary.error_count, summary.warning_count),
    );
    Ok(summary)
}

fn report(progress: &mut Option<&mut dyn Progress>, step: &str, msg: &str) {
    if let Some(p) = progress.as_deref_mut() {
        p.log(msg);
        p.item_done(step);
    }
}
