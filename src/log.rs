// src/log.rs
use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::{Mutex, OnceLock};
use std::time::Instant;

use crate::config::consts::{DEFAULT_LOGS_DIR, LOG_FILE};

static LOG_LOCK: Mutex<()> = Mutex::new(());
static START: OnceLock<Instant> = OnceLock::new();
static SINK: OnceLock<Sink> = OnceLock::new();

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DEBUG" => Ok(Level::Debug),
            "INFO" => Ok(Level::Info),
            "WARN" | "WARNING" => Ok(Level::Warn),
            "ERROR" => Ok(Level::Error),
            other => Err(format!("Unknown log level: {}", other)),
        }
    }
}

struct Sink {
    path: PathBuf,
    threshold: Level,
    console: bool,
}

fn start() -> Instant {
    *START.get_or_init(Instant::now)
}

fn sink() -> &'static Sink {
    SINK.get_or_init(|| Sink {
        path: Path::new(DEFAULT_LOGS_DIR).join(LOG_FILE),
        threshold: Level::Info,
        console: false,
    })
}

/// Configure the process-wide sink. First call wins; later calls return false.
pub fn init(threshold: Level, path: impl Into<PathBuf>, console: bool) -> bool {
    start();
    SINK.set(Sink { path: path.into(), threshold, console }).is_ok()
}

fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

/// Internal logging function
pub fn write_log(level: Level, msg: &str) {
    let sink = sink();
    if level < sink.threshold {
        return;
    }

    let elapsed = fmt_elapsed(start().elapsed().as_millis());
    let line = format!("[{elapsed}][{level}] {msg}\n");

    if let Ok(_guard) = LOG_LOCK.lock() {
        if let Some(parent) = sink.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                let _ = fs::create_dir_all(parent);
            }
        }
        if let Ok(mut file) = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&sink.path)
        {
            let _ = file.write_all(line.as_bytes());
        }
        if sink.console && level >= Level::Info {
            eprintln!("{level}: {msg}");
        }
    }
}
