// src/data.rs
//
// Raw scraped course data, as handed over by the scraper.
//
// - CourseCatalog: course number → RawCourseRecord (ordered by course number).
// - RawCourseRecord: category → names (text) or semester sheets.
// - SemesterSheet: one semester's grades or evaluation, kept as a loose JSON
//                  object. Typed accessors parse fields on demand so a bad
//                  field only costs that field.
//
// Shape is checked once, when a JSON document becomes a CourseCatalog.
// Everything below that point is read-only.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Number, Value};

use crate::config::consts::{KEY_PARTICIPANTS, KEY_QUESTION};
use crate::error::AnalyzeError;

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CourseCatalog {
    courses: BTreeMap<String, RawCourseRecord>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RawCourseRecord {
    categories: BTreeMap<String, Category>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Category {
    Text(String),
    Sheets(Vec<SemesterSheet>),
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SemesterSheet(Map<String, Value>);

/// Answer counts for one evaluation question, keyed by option index.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VoteDistribution<'a>(&'a Map<String, Value>);

/* ---------------- CourseCatalog ---------------- */

impl CourseCatalog {
    /// Convert a parsed JSON document. Anything that is not an object where a
    /// mapping is expected (or not an array of objects where sheets are
    /// expected) is a structural error and fails the whole conversion.
    pub fn from_value(doc: Value) -> Result<Self, AnalyzeError> {
        let top = match doc {
            Value::Object(top) => top,
            other => {
                return Err(AnalyzeError::structure("<root>", format!("expected an object of courses, found {}", kind_of(&other))));
            }
        };

        let mut courses = BTreeMap::new();
        for (course_n, course) in top {
            let record = RawCourseRecord::from_value(&course_n, course)?;
            courses.insert(course_n, record);
        }
        Ok(Self { courses })
    }

    pub fn len(&self) -> usize { self.courses.len() }
    pub fn is_empty(&self) -> bool { self.courses.is_empty() }

    pub fn get(&self, course_n: &str) -> Option<&RawCourseRecord> {
        self.courses.get(course_n)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &RawCourseRecord)> {
        self.courses.iter()
    }
}

/* ---------------- RawCourseRecord ---------------- */

impl RawCourseRecord {
    fn from_value(course_n: &str, course: Value) -> Result<Self, AnalyzeError> {
        let fields = match course {
            Value::Object(fields) => fields,
            other => {
                return Err(AnalyzeError::structure(course_n, format!("course data is {}, not an object", kind_of(&other))));
            }
        };

        let mut categories = BTreeMap::new();
        for (name, value) in fields {
            let cat = match value {
                Value::Null => {
                    logd!("Course {}: '{}' is null, ignoring", course_n, name);
                    continue;
                }
                Value::String(text) => Category::Text(text),
                Value::Array(items) => {
                    let mut sheets = Vec::with_capacity(items.len());
                    for (i, item) in items.into_iter().enumerate() {
                        match item {
                            Value::Object(map) => sheets.push(SemesterSheet(map)),
                            other => {
                                return Err(AnalyzeError::structure(
                                    course_n,
                                    format!("{name} entry {i} is {}, not an object", kind_of(&other)),
                                ));
                            }
                        }
                    }
                    Category::Sheets(sheets)
                }
                other => {
                    return Err(AnalyzeError::structure(
                        course_n,
                        format!("{name} is {}, expected text or a list of sheets", kind_of(&other)),
                    ));
                }
            };
            categories.insert(name, cat);
        }
        Ok(Self { categories })
    }

    pub fn get(&self, name: &str) -> Option<&Category> {
        self.categories.get(name)
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        match self.categories.get(name)? {
            Category::Text(t) => Some(t),
            Category::Sheets(_) => None,
        }
    }

    pub fn sheets(&self, name: &str) -> Option<&[SemesterSheet]> {
        match self.categories.get(name)? {
            Category::Sheets(s) => Some(s),
            Category::Text(_) => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Category)> {
        self.categories.iter()
    }
}

/* ---------------- SemesterSheet ---------------- */

impl SemesterSheet {
    pub fn new(map: Map<String, Value>) -> Self { Self(map) }

    pub fn get(&self, key: &str) -> Option<&Value> { self.0.get(key) }
    pub fn contains(&self, key: &str) -> bool { self.0.contains_key(key) }

    /// Participant count; absent or unparsable reads as None.
    pub fn participants(&self) -> Option<i64> {
        self.get(KEY_PARTICIPANTS).and_then(as_int)
    }

    /// Participant count with the selector's default of 0.
    pub fn participants_or_zero(&self) -> i64 {
        self.participants().unwrap_or(0)
    }

    /// Evaluation question by id (e.g. "1.1"), if it is a vote mapping.
    pub fn votes(&self, question_id: &str) -> Option<VoteDistribution<'_>> {
        match self.get(question_id)? {
            Value::Object(map) => Some(VoteDistribution(map)),
            _ => None,
        }
    }
}

impl From<Map<String, Value>> for SemesterSheet {
    fn from(map: Map<String, Value>) -> Self { Self(map) }
}

/* ---------------- VoteDistribution ---------------- */

impl<'a> VoteDistribution<'a> {
    pub fn new(map: &'a Map<String, Value>) -> Self { Self(map) }

    /// Question text, if the scraper captured it.
    pub fn question(self) -> Option<&'a str> {
        self.0.get(KEY_QUESTION).and_then(Value::as_str)
    }

    /// Raw (option, count) pairs, excluding the question text.
    pub fn entries(self) -> impl Iterator<Item = (&'a String, &'a Value)> + 'a {
        self.0.iter().filter(|(k, _)| k.as_str() != KEY_QUESTION)
    }
}

/* ---------------- Field parsing ---------------- */

/// Integer from a JSON number (integral only) or a numeric string.
pub fn as_int(v: &Value) -> Option<i64> {
    match v {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64().filter(|f| f.fract() == 0.0 && f.is_finite()).map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// Finite float from a JSON number or a numeric string.
pub fn as_float(v: &Value) -> Option<f64> {
    let f = match v {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    f.is_finite().then_some(f)
}

/// Numeric value kept in its original JSON form where possible
/// (85 stays 85, "85" becomes 85, 7.5 stays 7.5).
pub fn as_number(v: &Value) -> Option<Number> {
    match v {
        Value::Number(n) => Some(n.clone()),
        Value::String(s) => {
            let t = s.trim();
            if let Ok(i) = t.parse::<i64>() {
                Some(Number::from(i))
            } else {
                t.parse::<f64>().ok().and_then(Number::from_f64)
            }
        }
        _ => None,
    }
}

pub fn kind_of(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
