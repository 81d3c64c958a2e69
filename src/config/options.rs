// src/config/options.rs
use std::path::{Path, PathBuf};

use super::consts::*;
use crate::log::Level;

#[derive(Clone, Debug, PartialEq)]
pub struct AppOptions {
    pub paths: PathOptions,
    pub output: OutputOptions,
    pub log_level: Level,
    /// Abort before analysis when the validator reports errors.
    pub strict: bool,
    /// Only run the validator; no analysis, no output.
    pub validate_only: bool,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            paths: PathOptions::default(),
            output: OutputOptions::default(),
            log_level: Level::Info,
            strict: false,
            validate_only: false,
        }
    }
}

impl AppOptions {
    /// Defaults with `ANALYZER_ROOT` and `LOG_LEVEL` applied.
    pub fn from_env() -> Self {
        let mut opts = match std::env::var(ENV_ROOT) {
            Ok(root) if !root.trim().is_empty() => Self {
                paths: PathOptions::rooted_at(root.trim()),
                output: OutputOptions::rooted_at(root.trim()),
                ..Self::default()
            },
            _ => Self::default(),
        };

        if let Ok(v) = std::env::var(ENV_LOG_LEVEL) {
            match v.parse::<Level>() {
                Ok(level) => opts.log_level = level,
                Err(e) => eprintln!("Warning: {e}; using {}", opts.log_level),
            }
        }
        opts
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathOptions {
    pub data_dir: PathBuf,
    pub templates_dir: PathBuf,
    pub logs_dir: PathBuf,
    /// Explicit input file; falls back to `<data_dir>/coursedic.json`.
    pub input: Option<PathBuf>,
}

impl Default for PathOptions {
    fn default() -> Self {
        Self::rooted_at("")
    }
}

impl PathOptions {
    pub fn rooted_at(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            data_dir: root.join(DEFAULT_DATA_DIR),
            templates_dir: root.join(DEFAULT_TEMPLATES_DIR),
            logs_dir: root.join(DEFAULT_LOGS_DIR),
            input: None,
        }
    }

    pub fn course_data_file(&self) -> PathBuf {
        self.input
            .clone()
            .unwrap_or_else(|| self.data_dir.join(COURSE_DATA_FILE))
    }

    pub fn log_file(&self) -> PathBuf {
        self.logs_dir.join(LOG_FILE)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputOptions {
    pub extension_dir: PathBuf,
    /// Pretty-printed debug dump of the analyzed table.
    pub json_out: PathBuf,
    pub templates_dir: PathBuf,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self::rooted_at("")
    }
}

impl OutputOptions {
    pub fn rooted_at(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            extension_dir: root.join(DEFAULT_EXTENSION_DIR),
            json_out: root.join(DEFAULT_DATA_DIR).join(ANALYZED_DATA_FILE),
            templates_dir: root.join(DEFAULT_TEMPLATES_DIR),
        }
    }

    pub fn data_js(&self) -> PathBuf { self.extension_dir.join(EXT_DATA_JS) }
    pub fn table_html(&self) -> PathBuf { self.extension_dir.join(EXT_TABLE_HTML) }
    pub fn init_table_js(&self) -> PathBuf { self.extension_dir.join(EXT_INIT_TABLE_JS) }
}
