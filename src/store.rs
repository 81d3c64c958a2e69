// src/store.rs
use std::{fs, path::Path};

use serde::Serialize;
use serde_json::Value;

use crate::analysis::MetricsTable;
use crate::data::CourseCatalog;
use crate::error::{AnalyzeError, Result};
use crate::file::ensure_parent;

/// Read and parse a JSON document without interpreting it.
pub fn load_raw(path: &Path) -> Result<Value> {
    let text = fs::read_to_string(path).map_err(|e| AnalyzeError::io(path, e))?;
    serde_json::from_str(&text).map_err(|source| AnalyzeError::Json { path: path.to_path_buf(), source })
}

/// Load the scraped course dictionary.
pub fn load_catalog(path: &Path) -> Result<CourseCatalog> {
    let catalog = CourseCatalog::from_value(load_raw(path)?)?;
    logf!("Loaded {} courses from {}", catalog.len(), path.display());
    Ok(catalog)
}

/// Load a previously written analysis dump (data.json).
pub fn load_metrics(path: &Path) -> Result<MetricsTable> {
    serde_json::from_value(load_raw(path)?)
        .map_err(|source| AnalyzeError::Json { path: path.to_path_buf(), source })
}

/// Write `value` as JSON, pretty-printed with two-space indent or compact.
pub fn save_json<T: Serialize>(path: &Path, value: &T, pretty: bool) -> Result<()> {
    ensure_parent(path)?;
    let text = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .map_err(|source| AnalyzeError::Json { path: path.to_path_buf(), source })?;

    fs::write(path, text).map_err(|e| AnalyzeError::io(path, e))
}
