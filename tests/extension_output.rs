// tests/extension_output.rs
use std::fs;

use course_analyzer::analysis::MetricsTable;
use course_analyzer::config::options::OutputOptions;
use course_analyzer::file::write_extension;

fn sample() -> MetricsTable {
    let mut t = MetricsTable::new();
    let m = t.create("01005");
    m.name = Some("Matematik 1".into());
    m.name_en = Some("Mathematics <1>".into());
    m.pp = Some(87.5);
    m.lazyscore = Some(12.0);
    t
}

#[test]
fn writes_all_extension_files() {
    let dir = tempfile::tempdir().unwrap();
    let out = OutputOptions::rooted_at(dir.path());

    let written = write_extension(&sample(), &out).unwrap();
    assert_eq!(written.len(), 4);
    for p in &written {
        assert!(p.is_file(), "{} missing", p.display());
    }

    let js = fs::read_to_string(out.data_js()).unwrap();
    assert!(js.starts_with("window.data = \n{"));
    let json: serde_json::Value = serde_json::from_str(js.trim_start_matches("window.data = \n")).unwrap();
    assert_eq!(json["01005"]["pp"], 87.5);

    let html = fs::read_to_string(out.table_html()).unwrap();
    assert!(!html.contains("$table"));
    assert!(html.contains("Mathematics &lt;1&gt;"));
    assert!(html.contains("kurser.dtu.dk/course/01005"));

    let init = fs::read_to_string(out.init_table_js()).unwrap();
    assert!(!init.contains("$searchable_columns"));

    let dump = fs::read_to_string(&out.json_out).unwrap();
    assert!(dump.contains("\n  \"01005\""));
}

#[test]
fn local_templates_are_used_when_present() {
    let dir = tempfile::tempdir().unwrap();
    let out = OutputOptions::rooted_at(dir.path());
    fs::create_dir_all(&out.templates_dir).unwrap();
    fs::write(out.templates_dir.join("db.html"), "<body>$table</body>").unwrap();

    write_extension(&sample(), &out).unwrap();
    let html = fs::read_to_string(out.table_html()).unwrap();
    assert!(html.starts_with("<body><table"));
    assert!(html.ends_with("</table></body>"));
}

#[test]
fn unwritable_dump_does_not_fail_the_export() {
    let dir = tempfile::tempdir().unwrap();
    let mut out = OutputOptions::rooted_at(dir.path());
    // parent of the dump is a regular file
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "x").unwrap();
    out.json_out = blocker.join("data.json");

    let written = write_extension(&sample(), &out).unwrap();
    assert_eq!(written.len(), 3);
    assert!(!written.contains(&out.json_out));
}
