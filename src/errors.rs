//! Unified application error type.
//! Every module (source, core, export, cli) returns AppError so callers
//! deal with a single error shape. Per-record malformations are NOT errors:
//! they are reported as `core::grid::SkipReason` and never abort a build.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / decoding
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Collaborator failures
    // ---------------------------
    /// A whole upstream source (roster, catalog or task register) failed or
    /// returned an unexpected top-level shape. No grid is published.
    #[error("Source '{source_name}' failed: {message}")]
    Source {
        source_name: &'static str,
        message: String,
    },

    // ---------------------------
    // Parsing errors (user input)
    // ---------------------------
    #[error("Invalid month: {0} (expected YYYY-MM)")]
    InvalidMonth(String),

    #[error("Invalid line: {0} (expected L1 or L2)")]
    InvalidLine(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid override: {0}")]
    InvalidOverride(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

impl AppError {
    pub fn source_failure(source_name: &'static str, message: impl Into<String>) -> Self {
        AppError::Source {
            source_name,
            message: message.into(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
