// src/analysis/metrics.rs
//
// Output side of the analysis: one CourseMetrics per surviving course, plus
// the percentile tags and table columns that downstream renderers use.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// Per-course output record. Every field is optional; a record with no
/// fields set is dropped at the end of a processing pass.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CourseMetrics {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_en: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passpercent: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade_participants: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grades: Option<BTreeMap<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_participants: Option<Number>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pp: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avgp: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualityscore: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workload: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lazyscore: Option<f64>,
}

impl CourseMetrics {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn percentile(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::PassPercent => self.pp,
            Metric::Avg => self.avgp,
            Metric::Quality => self.qualityscore,
            Metric::Workload => self.workload,
            Metric::Lazy => self.lazyscore,
        }
    }

    pub fn set_percentile(&mut self, metric: Metric, value: f64) {
        let slot = match metric {
            Metric::PassPercent => &mut self.pp,
            Metric::Avg => &mut self.avgp,
            Metric::Quality => &mut self.qualityscore,
            Metric::Workload => &mut self.workload,
            Metric::Lazy => &mut self.lazyscore,
        };
        *slot = Some(value);
    }

    /// Cell value for a table column, in JSON form so numbers print the way
    /// the data file writes them.
    pub fn cell(&self, col: Column) -> Option<Value> {
        let f = |v: Option<f64>| v.and_then(Number::from_f64).map(Value::Number);
        let n = |v: &Option<Number>| v.clone().map(Value::Number);
        match col {
            Column::Name => self.name.clone().map(Value::String),
            Column::NameEn => self.name_en.clone().map(Value::String),
            Column::Avg => f(self.avg),
            Column::Avgp => f(self.avgp),
            Column::PassPercent => n(&self.passpercent),
            Column::GradeParticipants => n(&self.grade_participants),
            Column::ReviewParticipants => n(&self.review_participants),
            Column::QualityScore => f(self.qualityscore),
            Column::Workload => f(self.workload),
            Column::LazyScore => f(self.lazyscore),
        }
    }
}

/// Percentile tag written back by the ranker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Metric {
    PassPercent,
    Avg,
    Quality,
    Workload,
    Lazy,
}

impl Metric {
    pub const ALL: [Metric; 5] = [
        Metric::PassPercent,
        Metric::Avg,
        Metric::Quality,
        Metric::Workload,
        Metric::Lazy,
    ];

    /// Key in the output record.
    pub fn tag(self) -> &'static str {
        match self {
            Metric::PassPercent => "pp",
            Metric::Avg => "avgp",
            Metric::Quality => "qualityscore",
            Metric::Workload => "workload",
            Metric::Lazy => "lazyscore",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Columns of the course table, in display order (course id comes first and
/// is not a column of the record).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Column {
    Name,
    NameEn,
    Avg,
    Avgp,
    PassPercent,
    GradeParticipants,
    ReviewParticipants,
    QualityScore,
    Workload,
    LazyScore,
}

impl Column {
    pub const ALL: [Column; 10] = [
        Column::Name,
        Column::NameEn,
        Column::Avg,
        Column::Avgp,
        Column::PassPercent,
        Column::GradeParticipants,
        Column::ReviewParticipants,
        Column::QualityScore,
        Column::Workload,
        Column::LazyScore,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Column::Name => "name",
            Column::NameEn => "name_en",
            Column::Avg => "avg",
            Column::Avgp => "avgp",
            Column::PassPercent => "passpercent",
            Column::GradeParticipants => "grade_participants",
            Column::ReviewParticipants => "review_participants",
            Column::QualityScore => "qualityscore",
            Column::Workload => "workload",
            Column::LazyScore => "lazyscore",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Column::Name => "Name",
            Column::NameEn => "Name (EN)",
            Column::Avg => "Average Grade",
            Column::Avgp => "Average Grade Percentile",
            Column::PassPercent => "Percent Passed",
            Column::GradeParticipants => "Total Students",
            Column::ReviewParticipants => "Feedback Count",
            Column::QualityScore => "Course Rating",
            Column::Workload => "Workload",
            Column::LazyScore => "Lazy Score Percentile",
        }
    }

    /// Hidden in the rendered table but still searchable.
    pub fn hidden(self) -> bool {
        matches!(self, Column::NameEn)
    }

    pub fn is_text(self) -> bool {
        matches!(self, Column::Name | Column::NameEn)
    }
}

/// Analyzed courses keyed by course number.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetricsTable {
    courses: BTreeMap<String, CourseMetrics>,
}

impl MetricsTable {
    pub fn new() -> Self { Self::default() }

    pub fn len(&self) -> usize { self.courses.len() }
    pub fn is_empty(&self) -> bool { self.courses.is_empty() }

    pub fn get(&self, course_n: &str) -> Option<&CourseMetrics> {
        self.courses.get(course_n)
    }

    pub fn get_mut(&mut self, course_n: &str) -> Option<&mut CourseMetrics> {
        self.courses.get_mut(course_n)
    }

    /// Fresh record for a course, replacing any previous one.
    pub fn create(&mut self, course_n: &str) -> &mut CourseMetrics {
        self.courses.insert(course_n.to_owned(), CourseMetrics::default());
        self.courses.entry(course_n.to_owned()).or_default()
    }

    pub fn contains(&self, course_n: &str) -> bool {
        self.courses.contains_key(course_n)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &CourseMetrics)> {
        self.courses.iter()
    }

    /// Drop records that ended up with no data. Returns how many were removed.
    pub fn remove_empty(&mut self) -> usize {
        let before = self.courses.len();
        self.courses.retain(|_, m| !m.is_empty());
        before - self.courses.len()
    }
}

impl FromIterator<(String, CourseMetrics)> for MetricsTable {
    fn from_iter<I: IntoIterator<Item = (String, CourseMetrics)>>(iter: I) -> Self {
        Self { courses: iter.into_iter().collect() }
    }
}
