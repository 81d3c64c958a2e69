// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::analysis::MetricsTable;
use crate::config::consts::{TEMPLATE_INIT_TABLE_JS, TEMPLATE_TABLE_HTML};
use crate::config::options::OutputOptions;
use crate::error::{AnalyzeError, Result};
use crate::render;
use crate::store;

const BUILTIN_TABLE_HTML: &str = include_str!("../templates/db.html");
const BUILTIN_INIT_TABLE_JS: &str = include_str!("../templates/init_table.js");

/// Write every extension file for `table` and return the paths written.
///
/// `db/data.js`, `db.html` and `js/init_table.js` go under the extension
/// folder and any failure there is an error. The pretty `data.json` dump is
/// best effort: a failure is logged and skipped.
pub fn write_extension(table: &MetricsTable, out: &OutputOptions) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(4);

    let data_js_path = out.data_js();
    let js = render::data_js(table)
        .map_err(|source| AnalyzeError::Json { path: data_js_path.clone(), source })?;
    write_text(&data_js_path, &js)?;
    logf!("Wrote extension data to {}", data_js_path.display());
    written.push(data_js_path);

    match store::save_json(&out.json_out, table, true) {
        Ok(()) => {
            logf!("Wrote formatted data to {}", out.json_out.display());
            written.push(out.json_out.clone());
        }
        Err(e) => logw!("Failed to write {}: {}", out.json_out.display(), e),
    }

    let html_path = out.table_html();
    let template = load_template(&out.templates_dir, TEMPLATE_TABLE_HTML, BUILTIN_TABLE_HTML)?;
    let page = render::fill_template(&template, render::TABLE_PLACEHOLDER, &render::html_table(table));
    write_text(&html_path, &page)?;
    logf!("Generated {}", html_path.display());
    written.push(html_path);

    let init_path = out.init_table_js();
    let template = load_template(&out.templates_dir, TEMPLATE_INIT_TABLE_JS, BUILTIN_INIT_TABLE_JS)?;
    let script = render::fill_template(&template, render::COLUMNS_PLACEHOLDER, &render::searchable_columns());
    write_text(&init_path, &script)?;
    logf!("Generated {}", init_path.display());
    written.push(init_path);

    Ok(written)
}

/// Template from `dir`, or the copy built into the binary when the file
/// does not exist. Any other read error is reported.
pub fn load_template(dir: &Path, name: &str, builtin: &str) -> Result<String> {
    let path = dir.join(name);
    match fs::read_to_string(&path) {
        Ok(text) => Ok(text),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            logd!("Template {} not found, using built-in copy", path.display());
            Ok(s!(builtin))
        }
        Err(source) => Err(AnalyzeError::Template { path, source }),
    }
}

pub fn write_text(path: &Path, contents: &str) -> Result<()> {
    ensure_parent(path)?;
    fs::write(path, contents).map_err(|e| AnalyzeError::io(path, e))
}

/// Create the parent directory of `path` if it has one.
pub fn ensure_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => ensure_directory(parent),
        _ => Ok(()),
    }
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(AnalyzeError::io(
            dir,
            std::io::Error::other("path exists but is not a directory"),
        ));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| AnalyzeError::io(dir, e))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_templates_carry_placeholders() {
        assert!(BUILTIN_TABLE_HTML.contains(render::TABLE_PLACEHOLDER));
        assert!(BUILTIN_INIT_TABLE_JS.contains(render::COLUMNS_PLACEHOLDER));
    }

    #[test]
    fn local_template_wins_over_builtin() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("db.html"), "custom $table").unwrap();
        let t = load_template(dir.path(), "db.html", "builtin").unwrap();
        assert_eq!(t, "custom $table");
        let t = load_template(dir.path(), "missing.html", "builtin").unwrap();
        assert_eq!(t, "builtin");
    }

    #[test]
    fn ensure_directory_rejects_files() {
        let dir = tempfile::tempdir().unwrap();
        let f = dir.path().join("plain");
        fs::write(&f, "x").unwrap();
        assert!(ensure_directory(&f).is_err());
        assert!(ensure_directory(&dir.path().join("a/b")).is_ok());
        assert!(dir.path().join("a/b").is_dir());
    }
}
