// src/validate.rs
//
// Sanity checks on freshly scraped data. Catches a changed website layout
// (too few courses, missing fields, untranslated names) before analysis.
// Works on the raw JSON so it can report problems that would make the
// structured conversion fail.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::config::consts::*;

const GRADE_REQUIRED_FIELDS: [&str; 2] = [KEY_TIMESTAMP, KEY_PARTICIPANTS];
const REVIEW_REQUIRED_FIELDS: [&str; 2] = [KEY_TIMESTAMP, KEY_PARTICIPANTS];

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ValidationSummary {
    pub total_courses: usize,
    pub error_count: usize,
    pub warning_count: usize,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub passed: bool,
}

pub struct CourseDataValidator<'a> {
    data: &'a Value,
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl<'a> CourseDataValidator<'a> {
    pub fn new(data: &'a Value) -> Self {
        Self { data, errors: Vec::new(), warnings: Vec::new() }
    }

    /// Run every check. Returns true when no errors were found (warnings
    /// are allowed). Findings are logged and kept for `summary()`.
    pub fn validate(&mut self) -> bool {
        self.errors.clear();
        self.warnings.clear();

        match self.data {
            Value::Object(courses) => {
                self.check_course_count(courses);
                for (course_id, course) in courses {
                    self.check_course_id(course_id);
                    self.check_course(course_id, course);
                }
                self.check_data_quality(courses);
            }
            _ => self.errors.push(s!("Course data is not an object of courses")),
        }

        for w in &self.warnings {
            logw!("{}", w);
        }
        for e in &self.errors {
            loge!("{}", e);
        }

        if !self.errors.is_empty() {
            loge!(
                "Validation FAILED with {} errors and {} warnings",
                self.errors.len(),
                self.warnings.len()
            );
            return false;
        }
        logf!("Validation PASSED with {} warnings", self.warnings.len());
        true
    }

    pub fn errors(&self) -> &[String] { &self.errors }
    pub fn warnings(&self) -> &[String] { &self.warnings }

    pub fn summary(&self) -> ValidationSummary {
        ValidationSummary {
            total_courses: self.data.as_object().map_or(0, Map::len),
            error_count: self.errors.len(),
            warning_count: self.warnings.len(),
            errors: self.errors.clone(),
            warnings: self.warnings.clone(),
            passed: self.errors.is_empty(),
        }
    }

    fn check_course_count(&mut self, courses: &Map<String, Value>) {
        let count = courses.len();
        if count == 0 {
            self.errors.push(s!("No courses found in data"));
        } else if count < MIN_COURSES {
            self.warnings.push(format!(
                "Only {count} courses found (expected at least {MIN_COURSES}). \
                 The website structure may have changed."
            ));
        } else {
            logf!("Found {} courses", count);
        }
    }

    fn check_course_id(&mut self, course_id: &str) {
        if course_id.is_empty() {
            self.errors.push(s!("Empty course ID found"));
            return;
        }
        if course_id.len() != COURSE_ID_LEN || !course_id.bytes().all(|b| b.is_ascii_digit()) {
            self.warnings.push(format!("Unusual course ID format: {course_id}"));
        }
    }

    fn check_course(&mut self, course_id: &str, course: &Value) {
        let Some(fields) = course.as_object() else {
            self.errors.push(format!("Course {course_id}: data is not an object"));
            return;
        };
        if fields.is_empty() {
            self.warnings.push(format!("Course {course_id}: empty data"));
            return;
        }

        if let Some(grades) = fields.get(CAT_GRADES) {
            self.check_grades(course_id, grades);
        }
        if let Some(reviews) = fields.get(CAT_REVIEWS) {
            self.check_reviews(course_id, reviews);
        }
        if !fields.contains_key(CAT_NAME) {
            self.warnings.push(format!("Course {course_id}: missing name"));
        }
    }

    fn check_grades(&mut self, course_id: &str, grades: &Value) {
        let Some(entries) = grades.as_array() else {
            self.errors.push(format!("Course {course_id}: grades is not a list"));
            return;
        };

        for (i, entry) in entries.iter().enumerate() {
            let Some(sheet) = entry.as_object() else {
                self.errors.push(format!("Course {course_id}: grade entry {i} is not an object"));
                continue;
            };

            let missing = missing_fields(sheet, &GRADE_REQUIRED_FIELDS);
            if !missing.is_empty() {
                self.warnings.push(format!("Course {course_id}: grade entry {i} missing fields: {}", missing.join(", ")));
            }

            if let Some(v) = sheet.get(KEY_PARTICIPANTS) {
                match loose_int(v) {
                    Some(n) if n < 0 => self.warnings.push(format!("Course {course_id}: negative participants count")),
                    Some(_) => {}
                    None => self.errors.push(format!("Course {course_id}: invalid participants value")),
                }
            }

            if let Some(v) = sheet.get(KEY_PASS_PERCENTAGE) {
                match loose_int(v) {
                    Some(pct) if !(0..=100).contains(&pct) => {
                        self.warnings.push(format!("Course {course_id}: pass_percentage {pct} out of range"))
                    }
                    Some(_) => {}
                    None => self.errors.push(format!("Course {course_id}: invalid pass_percentage value")),
                }
            }

            if let Some(v) = sheet.get(KEY_AVG) {
                let (lo, hi) = AVG_RANGE;
                match crate::data::as_float(v) {
                    Some(avg) if !(lo..=hi).contains(&avg) => {
                        self.warnings.push(format!("Course {course_id}: average {avg} out of expected range"))
                    }
                    Some(_) => {}
                    None => self.errors.push(format!("Course {course_id}: invalid avg value")),
                }
            }
        }
    }

    fn check_reviews(&mut self, course_id: &str, reviews: &Value) {
        let Some(entries) = reviews.as_array() else {
            self.errors.push(format!("Course {course_id}: reviews is not a list"));
            return;
        };

        for (i, entry) in entries.iter().enumerate() {
            let Some(sheet) = entry.as_object() else {
                self.errors.push(format!("Course {course_id}: review entry {i} is not an object"));
                continue;
            };

            let missing = missing_fields(sheet, &REVIEW_REQUIRED_FIELDS);
            if !missing.is_empty() {
                self.warnings.push(format!("Course {course_id}: review entry {i} missing fields: {}", missing.join(", ")));
            }

            if let Some(v) = sheet.get(KEY_PARTICIPANTS) {
                match loose_int(v) {
                    Some(n) if n < 0 => self.warnings.push(format!("Course {course_id}: negative review participants")),
                    Some(_) => {}
                    None => self.errors.push(format!("Course {course_id}: invalid review participants value")),
                }
            }
        }
    }

    fn check_data_quality(&mut self, courses: &Map<String, Value>) {
        let total = courses.len();
        if total == 0 {
            return;
        }

        let share = |key: &str| {
            let n = courses.values().filter(|c| c.get(key).is_some()).count();
            100.0 * n as f64 / total as f64
        };
        let grade_pct = share(CAT_GRADES);
        let review_pct = share(CAT_REVIEWS);
        let name_pct = share(CAT_NAME);

        logf!(
            "Data quality: {:.1}% have grades, {:.1}% have reviews, {:.1}% have names",
            grade_pct, review_pct, name_pct
        );

        if grade_pct < MIN_GRADE_SHARE {
            self.warnings.push(format!("Only {grade_pct:.1}% of courses have grade data"));
        }
        if review_pct < MIN_REVIEW_SHARE {
            self.warnings.push(format!("Only {review_pct:.1}% of courses have review data"));
        }
        if name_pct < MIN_NAME_SHARE {
            self.warnings.push(format!("Only {name_pct:.1}% of courses have names"));
        }

        self.check_name_translations(courses);
    }

    /// Danish and English names should mostly differ; if they don't, the
    /// scraper is probably not requesting the Danish page.
    fn check_name_translations(&mut self, courses: &Map<String, Value>) {
        let mut both = 0usize;
        let mut same = 0usize;
        for course in courses.values() {
            if let (Some(da), Some(en)) = (non_empty(course, CAT_NAME), non_empty(course, CAT_NAME_EN)) {
                both += 1;
                if da == en {
                    same += 1;
                }
            }
        }

        if both == 0 {
            self.warnings.push(s!("No courses have both Danish and English names"));
            return;
        }

        let same_pct = 100.0 * same as f64 / both as f64;
        let diff = both - same;
        logf!(
            "Name translations: {}/{} ({:.1}%) have unique Danish names",
            diff,
            both,
            100.0 * diff as f64 / both as f64
        );

        if same_pct > MAX_SAME_NAME_SHARE {
            self.warnings.push(format!(
                "Name translation issue: {same_pct:.1}% of courses have identical Danish/English names. \
                 Check that the scraper requests the Danish pages."
            ));
        }
    }
}

fn non_empty<'v>(course: &'v Value, key: &str) -> Option<&'v str> {
    course.get(key).and_then(Value::as_str).filter(|s| !s.is_empty())
}

fn missing_fields<'f>(sheet: &Map<String, Value>, required: &[&'f str]) -> Vec<&'f str> {
    required.iter().copied().filter(|f| !sheet.contains_key(*f)).collect()
}

/// Integer the lenient way: floats truncate, numeric strings parse.
fn loose_int(v: &Value) -> Option<i64> {
    match v {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn good_course(name: &str, name_en: &str) -> Value {
        json!({
            "name": name,
            "name_en": name_en,
            "grades": [{ "timestamp": "E23", "participants": 40, "pass_percentage": 90, "avg": 7.1 }],
            "reviews": [{ "timestamp": "E23", "participants": 12, "firstOption": "Helt enig" }]
        })
    }

    #[test]
    fn empty_catalog_fails() {
        let data = json!({});
        let mut v = CourseDataValidator::new(&data);
        assert!(!v.validate());
        assert_eq!(v.errors(), ["No courses found in data"]);
    }

    #[test]
    fn small_but_clean_catalog_passes_with_warning() {
        let data = json!({ "01005": good_course("Matematik 1", "Mathematics 1") });
        let mut v = CourseDataValidator::new(&data);
        assert!(v.validate());
        let summary = v.summary();
        assert!(summary.passed);
        assert_eq!(summary.total_courses, 1);
        assert_eq!(summary.error_count, 0);
        assert!(summary.warnings[0].starts_with("Only 1 courses found"));
    }

    #[test]
    fn bad_field_values_are_errors() {
        let data = json!({
            "01005": {
                "name": "X",
                "grades": [{ "timestamp": "E23", "participants": "many", "pass_percentage": "n/a", "avg": "?" }],
                "reviews": [{ "timestamp": "E23", "participants": [] }]
            }
        });
        let mut v = CourseDataValidator::new(&data);
        assert!(!v.validate());
        assert_eq!(v.errors().len(), 4);
    }

    #[test]
    fn out_of_range_values_are_warnings() {
        let data = json!({
            "01005": {
                "name": "X",
                "grades": [{ "timestamp": "E23", "participants": -1, "pass_percentage": 140, "avg": 13.0 }]
            }
        });
        let mut v = CourseDataValidator::new(&data);
        assert!(v.validate());
        let w = v.warnings();
        assert!(w.iter().any(|m| m.contains("negative participants")));
        assert!(w.iter().any(|m| m.contains("pass_percentage 140 out of range")));
        assert!(w.iter().any(|m| m.contains("average 13 out of expected range")));
    }

    #[test]
    fn structure_problems_are_errors() {
        let data = json!({
            "01005": "not a course",
            "02101": { "name": "Y", "grades": {}, "reviews": [1] }
        });
        let mut v = CourseDataValidator::new(&data);
        assert!(!v.validate());
        assert_eq!(v.errors().len(), 3);
    }

    #[test]
    fn odd_ids_and_missing_fields_warn() {
        let data = json!({ "ABC": { "grades": [{}] } });
        let mut v = CourseDataValidator::new(&data);
        assert!(v.validate());
        let w = v.warnings();
        assert!(w.iter().any(|m| m == "Unusual course ID format: ABC"));
        assert!(w.iter().any(|m| m.contains("missing fields: timestamp, participants")));
        assert!(w.iter().any(|m| m == "Course ABC: missing name"));
    }

    #[test]
    fn identical_names_are_flagged() {
        let data = json!({
            "01005": good_course("Physics", "Physics"),
            "01006": good_course("Chemistry", "Chemistry"),
        });
        let mut v = CourseDataValidator::new(&data);
        v.validate();
        assert!(v.warnings().iter().any(|m| m.starts_with("Name translation issue: 100.0%")));
    }

    #[test]
    fn revalidating_does_not_duplicate_findings() {
        let data = json!({});
        let mut v = CourseDataValidator::new(&data);
        v.validate();
        v.validate();
        assert_eq!(v.summary().error_count, 1);
    }
}
