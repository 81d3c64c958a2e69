// benches/ranking.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_json::{json, Map, Value};

use course_analyzer::analysis::{insert_percentile, process_courses, Metric, MetricsTable, RankEntry};
use course_analyzer::data::CourseCatalog;

const COURSES: usize = 1500;

/// Deterministic catalog roughly the size of a full scrape.
fn synthetic_catalog() -> CourseCatalog {
    let mut courses = Map::new();
    for i in 0..COURSES {
        let n = i as i64;
        courses.insert(
            format!("{:05}", 10000 + i),
            json!({
                "name": format!("Kursus {i}"),
                "name_en": format!("Course {i}"),
                "grades": [
                    { "participants": 10 + n % 200, "pass_percentage": 40 + n % 61, "avg": (n % 150) as f64 / 10.0 - 3.0 },
                    { "participants": 30, "pass_percentage": 75, "avg": 6.0 }
                ],
                "reviews": [{
                    "participants": 5 + n % 80,
                    "firstOption": if i % 2 == 0 { "Helt enig" } else { "Helt uenig" },
                    "1.1": { "0": n % 7, "1": n % 11, "2": 5, "3": n % 5, "4": 2 },
                    "2.1": { "0": 3, "1": n % 9, "2": n % 4, "3": 4, "4": n % 6 }
                }]
            }),
        );
    }
    CourseCatalog::from_value(Value::Object(courses)).unwrap_or_default()
}

fn bench_ranking(c: &mut Criterion) {
    let catalog = synthetic_catalog();

    c.bench_function("process_courses", |b| {
        b.iter(|| {
            let table = process_courses(black_box(&catalog)).map(|t| t.len()).unwrap_or(0);
            black_box(table)
        })
    });

    let mut target = MetricsTable::new();
    let base: Vec<RankEntry> = (0..COURSES)
        .map(|i| {
            let id = format!("{:05}", 10000 + i);
            target.create(&id);
            RankEntry::new(id, ((i * 7919) % 1000) as f64 / 10.0)
        })
        .collect();

    c.bench_function("insert_percentile", |b| {
        b.iter(|| {
            let mut entries = base.clone();
            insert_percentile(black_box(&mut entries), Metric::PassPercent, &mut target);
            black_box(entries.len())
        })
    });
}

criterion_group!(benches, bench_ranking);
criterion_main!(benches);
