// src/analysis/mod.rs
//
// Sheet selection → score extraction → percentile ranking.

pub mod metrics;
pub mod percentile;
pub mod pipeline;
pub mod score;
pub mod selector;

pub use metrics::{Column, CourseMetrics, Metric, MetricsTable};
pub use percentile::{insert_percentile, round1, RankEntry};
pub use pipeline::process_courses;
pub use score::{calc_score, ScaleOrientation};
pub use selector::select_best_sheet;
