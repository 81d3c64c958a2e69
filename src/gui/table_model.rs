// src/gui/table_model.rs
//! Row order for the course table.
//!
//! The analyzed table stays as-is; the GUI renders a list of course numbers
//! produced here from the search text and the sort column. Missing values
//! always sort last, in either direction.

use std::cmp::Ordering;

use serde_json::Value;

use crate::analysis::{Column, CourseMetrics, MetricsTable};

#[derive(Clone, Debug, PartialEq)]
enum SortKey {
    Text(String),
    Num(f64),
}

fn sort_key(m: &CourseMetrics, col: Column) -> Option<SortKey> {
    match m.cell(col)? {
        Value::String(s) => Some(SortKey::Text(s.to_lowercase())),
        Value::Number(n) => n.as_f64().map(SortKey::Num),
        _ => None,
    }
}

fn compare_keys(a: &Option<SortKey>, b: &Option<SortKey>, desc: bool) -> Ordering {
    let ord = match (a, b) {
        (None, None) => return Ordering::Equal,
        (None, Some(_)) => return Ordering::Greater,
        (Some(_), None) => return Ordering::Less,
        (Some(SortKey::Num(x)), Some(SortKey::Num(y))) => x.total_cmp(y),
        (Some(SortKey::Text(x)), Some(SortKey::Text(y))) => x.cmp(y),
        (Some(SortKey::Num(_)), Some(SortKey::Text(_))) => Ordering::Less,
        (Some(SortKey::Text(_)), Some(SortKey::Num(_))) => Ordering::Greater,
    };
    if desc { ord.reverse() } else { ord }
}

/// Case-insensitive match on course number or either name.
/// `needle` must already be lowercase.
pub fn matches_search(course_n: &str, m: &CourseMetrics, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    course_n.to_lowercase().contains(needle)
        || m.name.as_deref().is_some_and(|n| n.to_lowercase().contains(needle))
        || m.name_en.as_deref().is_some_and(|n| n.to_lowercase().contains(needle))
}

/// Course numbers to display, filtered by `search` and sorted by `sort_by`.
/// Without a sort column rows keep course-number order.
pub fn row_order(table: &MetricsTable, search: &str, sort_by: Option<Column>, desc: bool) -> Vec<String> {
    let needle = search.trim().to_lowercase();
    let mut rows: Vec<(&String, &CourseMetrics)> = table
        .iter()
        .filter(|(id, m)| matches_search(id, m, &needle))
        .collect();

    if let Some(col) = sort_by {
        let mut keyed: Vec<_> = rows.drain(..).map(|(id, m)| (sort_key(m, col), id, m)).collect();
        keyed.sort_by(|a, b| compare_keys(&a.0, &b.0, desc));
        rows = keyed.into_iter().map(|(_, id, m)| (id, m)).collect();
    }

    rows.into_iter().map(|(id, _)| id.clone()).collect()
}

/// Cell text as shown in the table (and in db.html).
pub fn cell_text(m: &CourseMetrics, col: Column) -> String {
    match m.cell(col) {
        Some(Value::String(s)) => s,
        Some(v) => v.to_string(),
        None => s!(),
    }
}

/// Subset of `table` for the given course numbers.
pub fn subset(table: &MetricsTable, ids: &[String]) -> MetricsTable {
    ids.iter()
        .filter_map(|id| table.get(id).map(|m| (id.clone(), m.clone())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MetricsTable {
        let mut t = MetricsTable::new();
        let a = t.create("01005");
        a.name = Some(s!("Matematik 1"));
        a.name_en = Some(s!("Advanced Engineering Mathematics 1"));
        a.pp = Some(40.0);

        let b = t.create("02101");
        b.name = Some(s!("Indledende programmering"));
        b.name_en = Some(s!("Introductory Programming"));
        b.pp = Some(90.0);

        let c = t.create("10020");
        c.name = Some(s!("Fysik 1"));
        t
    }

    #[test]
    fn search_matches_id_and_both_names() {
        let t = sample();
        assert_eq!(row_order(&t, "021", None, false), ["02101"]);
        assert_eq!(row_order(&t, "PROGRAMMING", None, false), ["02101"]);
        assert_eq!(row_order(&t, " fysik ", None, false), ["10020"]);
        assert_eq!(row_order(&t, "", None, false).len(), 3);
    }

    #[test]
    fn missing_values_sort_last_both_ways() {
        let mut t = sample();
        t.get_mut("01005").unwrap().avgp = Some(10.0);
        t.get_mut("02101").unwrap().avgp = Some(90.0);

        assert_eq!(row_order(&t, "", Some(Column::Avgp), true), ["02101", "01005", "10020"]);
        assert_eq!(row_order(&t, "", Some(Column::Avgp), false), ["01005", "02101", "10020"]);
    }

    #[test]
    fn integer_columns_sort_numerically() {
        let mut t = sample();
        for (id, v) in [("01005", 5), ("02101", 120), ("10020", 80)] {
            t.get_mut(id).unwrap().grade_participants = Some(serde_json::Number::from(v));
        }
        assert_eq!(row_order(&t, "", Some(Column::GradeParticipants), true), ["02101", "10020", "01005"]);
        assert_eq!(row_order(&t, "", Some(Column::GradeParticipants), false), ["01005", "10020", "02101"]);
    }

    #[test]
    fn text_sort_is_case_insensitive() {
        let t = sample();
        assert_eq!(row_order(&t, "", Some(Column::Name), false), ["10020", "02101", "01005"]);
    }

    #[test]
    fn subset_keeps_requested_rows() {
        let t = sample();
        let s = subset(&t, &[s!("02101"), s!("nope")]);
        assert_eq!(s.len(), 1);
        assert!(s.contains("02101"));
    }
}
