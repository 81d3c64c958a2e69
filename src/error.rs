// src/error.rs
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure of the vote-distribution scorer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScoreError {
    #[error("insufficient data: no valid votes found")]
    InsufficientData,
}

#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Input is not a mapping/sequence where one is required.
    #[error("malformed course data for {course}: {reason}")]
    Structure { course: String, reason: String },

    #[error("template {}: {source}", path.display())]
    Template {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("validation failed with {} error(s)", errors.len())]
    Validation { errors: Vec<String> },
}

impl AnalyzeError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        AnalyzeError::Io { path: path.into(), source }
    }

    pub fn structure(course: impl Into<String>, reason: impl Into<String>) -> Self {
        AnalyzeError::Structure { course: course.into(), reason: reason.into() }
    }
}

pub type Result<T, E = AnalyzeError> = std::result::Result<T, E>;
