// src/render.rs
//
// Text outputs for the browser extension: the course table, the DataTables
// column setup and the data script. Pure string building; file.rs writes them.

use serde_json::Value;

use crate::analysis::{Column, MetricsTable};
use crate::config::consts::COURSE_BASE_URL;

pub const TABLE_PLACEHOLDER: &str = "$table";
pub const COLUMNS_PLACEHOLDER: &str = "$searchable_columns";

const TABLE_OPEN: &str = r#"<table id="example" class="display" cellspacing="0" width="100%">"#;
const HIDDEN: &str = r#" class="hidden-col""#;

/// One row per course, course id first, then `Column::ALL`.
pub fn html_table(table: &MetricsTable) -> String {
    let mut out = String::with_capacity(256 + table.len() * 256);
    out.push_str(TABLE_OPEN);
    out.push_str("<thead><tr><th>Course</th>");
    for col in Column::ALL {
        out.push_str(&format!("<th{}>{}</th>", hidden_attr(col), escape_html(col.title())));
    }
    out.push_str("</tr></thead><tbody>");

    for (course, m) in table.iter() {
        let id = escape_html(course);
        out.push_str(&format!("<tr><td><a href=\"{COURSE_BASE_URL}{id}\">{id}</a></td>"));
        for col in Column::ALL {
            let cell = m.cell(col).map(|v| cell_text(&v)).unwrap_or_default();
            out.push_str(&format!("<td{}>{}</td>", hidden_attr(col), escape_html(&cell)));
        }
        out.push_str("</tr>");
    }
    out.push_str("</tbody></table>");
    out
}

fn hidden_attr(col: Column) -> &'static str {
    if col.hidden() { HIDDEN } else { "" }
}

/// Strings print bare; numbers print the way serde_json writes them.
fn cell_text(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        Value::Null => s!(),
        other => other.to_string(),
    }
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// DataTables `aoColumnDefs` body. Column 0 is the course id; the name
/// columns are searchable, the numeric ones sort descending first.
pub fn searchable_columns() -> String {
    let mut out = s!(r#"{ "bSearchable": true, "aTargets": [ 0 ] }"#);
    for (i, col) in Column::ALL.into_iter().enumerate() {
        let sort = if col.is_text() {
            r#""bSearchable": true,"#
        } else {
            r#""asSorting": [ "desc", "asc" ], "bSearchable": false, "#
        };
        out.push_str(&format!(r#", {{ "type": "non-empty", {sort}"aTargets": [ {} ] }}"#, i + 1));
    }
    out
}

pub fn fill_template(template: &str, placeholder: &str, value: &str) -> String {
    template.replace(placeholder, value)
}

/// Script that hands the table to the extension as `window.data`.
pub fn data_js(table: &MetricsTable) -> Result<String, serde_json::Error> {
    Ok(format!("window.data = \n{}", serde_json::to_string(table)?))
}
