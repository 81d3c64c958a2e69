// src/analysis/percentile.rs
use std::cmp::Ordering;

use super::metrics::{Metric, MetricsTable};

/// One course's value in a ranking pass. `rank` and `percentile` are filled
/// in by `insert_percentile`.
#[derive(Clone, Debug, PartialEq)]
pub struct RankEntry {
    pub course: String,
    pub value: f64,
    pub rank: Option<usize>,
    pub percentile: Option<f64>,
}

impl RankEntry {
    pub fn new(course: impl Into<String>, value: f64) -> Self {
        Self { course: course.into(), value, rank: None, percentile: None }
    }
}

/// Ascending by value; equal values by course number, descending.
fn rank_order(a: &RankEntry, b: &RankEntry) -> Ordering {
    a.value
        .total_cmp(&b.value)
        .then_with(|| b.course.cmp(&a.course))
}

/// Round to one decimal using the exact value of `x`; exact ties go to even.
pub fn round1(x: f64) -> f64 {
    format!("{x:.1}").parse().unwrap_or(x)
}

/// Dense-rank `entries` and write each percentile into `target` under `tag`.
///
/// Entries end up sorted by `rank_order`. Equal values share a rank; the
/// top rank maps to 100.0 and the bottom to 0.0. When every value is the
/// same (or there is only one entry) everyone gets 0.0. Courses missing from
/// `target` keep their percentile on the entry only.
pub fn insert_percentile(entries: &mut [RankEntry], tag: Metric, target: &mut MetricsTable) {
    if entries.is_empty() {
        logw!("No data to calculate percentiles for '{}'", tag);
        return;
    }

    entries.sort_by(rank_order);

    let mut index = 0usize;
    let mut prev: Option<f64> = None;
    for entry in entries.iter_mut() {
        if prev.is_some_and(|p| entry.value != p) {
            index += 1;
        }
        entry.rank = Some(index);
        prev = Some(entry.value);
    }

    let max_index = index.max(1) as f64;
    for entry in entries.iter_mut() {
        let rank = entry.rank.unwrap_or(0) as f64;
        let pct = round1(100.0 * rank / max_index);
        entry.percentile = Some(pct);

        match target.get_mut(&entry.course) {
            Some(m) => m.set_percentile(tag, pct),
            None => logw!("Course {} ranked for '{}' but has no metrics record", entry.course, tag),
        }
    }

    logf!("Calculated {} percentiles for {} courses", tag, entries.len());
}
