// src/analysis/pipeline.rs
use std::collections::BTreeMap;

use super::metrics::{CourseMetrics, Metric, MetricsTable};
use super::percentile::{insert_percentile, RankEntry};
use super::score::{calc_score, ScaleOrientation};
use super::selector::select_best_sheet;
use crate::config::consts::*;
use crate::data::{as_float, as_number, Category, CourseCatalog, SemesterSheet};
use crate::error::AnalyzeError;

/// Values collected during extraction, one list per ranked metric.
#[derive(Debug, Default)]
struct Rankings {
    pass_percentages: Vec<RankEntry>,
    averages: Vec<RankEntry>,
    quality: Vec<RankEntry>,
    workloads: Vec<RankEntry>,
}

/// Turn the scraped catalog into per-course metrics with percentiles.
///
/// Fails only on structural problems (a grades/reviews category that is
/// text, or a name that is a list). Missing or unparsable fields just leave
/// the corresponding metric out for that course.
pub fn process_courses(catalog: &CourseCatalog) -> Result<MetricsTable, AnalyzeError> {
    let mut table = MetricsTable::new();
    let mut rankings = Rankings::default();

    for (course_n, course) in catalog.iter() {
        logd!("Processing course: {}", course_n);
        let metrics = table.create(course_n);

        for (category_n, cat) in course.iter() {
            match (category_n.as_str(), cat) {
                (CAT_NAME, Category::Text(name)) => metrics.name = Some(name.clone()),
                (CAT_NAME_EN, Category::Text(name)) => metrics.name_en = Some(name.clone()),
                (CAT_GRADES, Category::Sheets(sheets)) => {
                    if let Some(sheet) = select_best_sheet(sheets) {
                        extract_grades(course_n, sheet, metrics, &mut rankings);
                    }
                }
                (CAT_REVIEWS, Category::Sheets(sheets)) => {
                    if let Some(sheet) = select_best_sheet(sheets) {
                        extract_reviews(course_n, sheet, metrics, &mut rankings);
                    }
                }
                (CAT_NAME | CAT_NAME_EN, Category::Sheets(_)) => {
                    return Err(AnalyzeError::structure(course_n, format!("{category_n} is a list, expected text")));
                }
                (CAT_GRADES | CAT_REVIEWS, Category::Text(_)) => {
                    return Err(AnalyzeError::structure(course_n, format!("{category_n} is text, expected a list of sheets")));
                }
                (other, _) => logd!("Course {}: ignoring category '{}'", course_n, other),
            }
        }
    }

    let Rankings { mut pass_percentages, mut averages, mut quality, mut workloads } = rankings;
    insert_percentile(&mut pass_percentages, Metric::PassPercent, &mut table);
    insert_percentile(&mut averages, Metric::Avg, &mut table);
    insert_percentile(&mut quality, Metric::Quality, &mut table);
    insert_percentile(&mut workloads, Metric::Workload, &mut table);

    let mut lazy = lazy_scores(&workloads, &table);
    insert_percentile(&mut lazy, Metric::Lazy, &mut table);

    let removed = table.remove_empty();
    if removed > 0 {
        logd!("Dropped {} courses without data", removed);
    }
    logf!("Final dataset contains {} courses with data", table.len());
    Ok(table)
}

fn extract_grades(course_n: &str, sheet: &SemesterSheet, metrics: &mut CourseMetrics, rankings: &mut Rankings) {
    let Some(raw) = sheet.get(KEY_PASS_PERCENTAGE) else {
        logd!("Course {}: no pass_percentage in grades", course_n);
        return;
    };
    let Some(pass) = as_number(raw) else {
        logd!("Course {}: invalid pass_percentage {}", course_n, raw);
        return;
    };
    // as_number only yields finite values
    let Some(pass_value) = pass.as_f64() else {
        return;
    };

    metrics.passpercent = Some(pass);
    rankings.pass_percentages.push(RankEntry::new(course_n, pass_value));

    if let Some(raw) = sheet.get(KEY_AVG) {
        match as_float(raw) {
            Some(avg) => {
                metrics.avg = Some(avg);
                rankings.averages.push(RankEntry::new(course_n, avg));
            }
            None => logd!("Course {}: invalid avg value {}", course_n, raw),
        }
    }

    if let Some(p) = sheet.get(KEY_PARTICIPANTS) {
        match as_number(p) {
            Some(n) => metrics.grade_participants = Some(n),
            None => logd!("Course {}: invalid grade participants {}", course_n, p),
        }
    }

    let buckets: BTreeMap<String, serde_json::Value> = GRADE_BUCKETS
        .iter()
        .filter_map(|g| sheet.get(g).map(|v| (s!(*g), v.clone())))
        .collect();
    metrics.grades = Some(buckets);
}

fn extract_reviews(course_n: &str, sheet: &SemesterSheet, metrics: &mut CourseMetrics, rankings: &mut Rankings) {
    let label = sheet.get(KEY_FIRST_OPTION).and_then(|v| v.as_str()).unwrap_or("");
    let Some(orientation) = ScaleOrientation::from_first_option(label) else {
        logd!("Course {}: unknown firstOption '{}', skipping reviews", course_n, label);
        return;
    };

    if let Some(p) = sheet.get(KEY_PARTICIPANTS) {
        match as_number(p) {
            Some(n) => metrics.review_participants = Some(n),
            None => logd!("Course {}: invalid review participants {}", course_n, p),
        }
    }

    // Low option index always means low workload, whatever the survey's polarity.
    if sheet.contains(QUESTION_WORKLOAD) {
        match sheet.votes(QUESTION_WORKLOAD).map(|v| calc_score(v, true)) {
            Some(Ok(score)) => rankings.workloads.push(RankEntry::new(course_n, score)),
            Some(Err(e)) => logd!("Course {}: could not calculate workload: {}", course_n, e),
            None => logd!("Course {}: workload question is not a vote mapping", course_n),
        }
    }

    if sheet.contains(QUESTION_QUALITY) {
        match sheet
            .votes(QUESTION_QUALITY)
            .map(|v| calc_score(v, orientation.best_option_first()))
        {
            Some(Ok(score)) => rankings.quality.push(RankEntry::new(course_n, score)),
            Some(Err(e)) => logd!("Course {}: could not calculate quality score: {}", course_n, e),
            None => logd!("Course {}: quality question is not a vote mapping", course_n),
        }
    }
}

/// Composite of pass-rate and workload percentiles, for courses ranked on
/// workload that also have a pass-rate percentile.
fn lazy_scores(workloads: &[RankEntry], table: &MetricsTable) -> Vec<RankEntry> {
    workloads
        .iter()
        .filter_map(|entry| {
            let m = table.get(&entry.course)?;
            Some(RankEntry::new(entry.course.as_str(), m.pp? + m.workload?))
        })
        .collect()
}
