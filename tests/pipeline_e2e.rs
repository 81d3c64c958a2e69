// tests/pipeline_e2e.rs
use approx::assert_abs_diff_eq;
use serde_json::{json, Value};

use course_analyzer::analysis::{process_courses, Metric};
use course_analyzer::data::CourseCatalog;

fn course(name: &str, participants: i64, pass: i64, avg: f64, first: &str, quality: [i64; 5], workload: [i64; 5]) -> Value {
    let votes = |q: &str, v: [i64; 5]| {
        json!({ "question": q, "0": v[0], "1": v[1], "2": v[2], "3": v[3], "4": v[4] })
    };
    json!({
        "name": name,
        "name_en": format!("{name} (en)"),
        "grades": [
            { "participants": participants, "pass_percentage": pass, "avg": avg, "12": 3, "7": 4, "-3": 1 },
            { "participants": 2, "pass_percentage": 100, "avg": 12.0 }
        ],
        "reviews": [{
            "participants": participants / 2,
            "firstOption": first,
            "1.1": votes("Overall quality", quality),
            "2.1": votes("Workload", workload)
        }]
    })
}

fn catalog() -> CourseCatalog {
    CourseCatalog::from_value(json!({
        "01005": course("Matematik 1", 300, 80, 6.1, "Helt enig", [40, 30, 10, 5, 5], [10, 20, 30, 20, 10]),
        "02101": course("Programmering", 200, 95, 8.3, "Helt uenig", [2, 3, 10, 30, 50], [40, 30, 10, 5, 0]),
        "10020": course("Fysik 1", 150, 80, 5.0, "Helt enig", [5, 10, 20, 30, 20], [0, 5, 10, 30, 40]),
        "27002": { "name": "Biokemi", "grades": [{ "participants": 4, "pass_percentage": 50 }] },
        "99999": { "grades": [{ "participants": 1, "pass_percentage": 100 }] }
    }))
    .unwrap()
}

#[test]
fn full_catalog_produces_bounded_percentiles() {
    let t = process_courses(&catalog()).unwrap();

    // 99999 has nothing usable and no name
    assert_eq!(t.len(), 4);
    assert!(!t.contains("99999"));

    for id in ["01005", "02101", "10020"] {
        let m = t.get(id).unwrap();
        for metric in Metric::ALL {
            let p = m.percentile(metric).unwrap_or_else(|| panic!("{id} lacks {metric}"));
            assert!((0.0..=100.0).contains(&p));
            assert_abs_diff_eq!(p, (p * 10.0).round() / 10.0);
        }
    }

    let small = t.get("27002").unwrap();
    assert_eq!(small.name.as_deref(), Some("Biokemi"));
    assert!(small.pp.is_none());
}

#[test]
fn tied_pass_rates_share_a_percentile() {
    let t = process_courses(&catalog()).unwrap();
    let a = t.get("01005").unwrap().pp.unwrap();
    let b = t.get("10020").unwrap().pp.unwrap();
    assert_eq!(a, b);
    assert_eq!(a, 0.0);
    assert_eq!(t.get("02101").unwrap().pp, Some(100.0));
}

#[test]
fn reversed_scale_is_scored_the_same_way() {
    let t = process_courses(&catalog()).unwrap();
    // 02101 is rated best even though its survey lists "strongly disagree" first
    assert_eq!(t.get("02101").unwrap().qualityscore, Some(100.0));
    assert_eq!(t.get("10020").unwrap().qualityscore, Some(0.0));
}

#[test]
fn best_sheet_is_the_larger_one() {
    let t = process_courses(&catalog()).unwrap();
    let m = t.get("01005").unwrap();
    assert_eq!(m.passpercent.as_ref().and_then(|n| n.as_i64()), Some(80));
    assert_eq!(m.avg, Some(6.1));
    assert_eq!(m.grade_participants.as_ref().and_then(|n| n.as_i64()), Some(300));
    assert_eq!(m.grades.as_ref().map(|g| g.len()), Some(3));
}

#[test]
fn output_serializes_without_absent_fields() {
    let t = process_courses(&catalog()).unwrap();
    let v = serde_json::to_value(&t).unwrap();
    let small = v.get("27002").unwrap().as_object().unwrap();
    assert_eq!(small.len(), 1);
    assert_eq!(small.get("name"), Some(&json!("Biokemi")));
}
