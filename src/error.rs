//! Error types for dataset loading and configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading and normalizing the leaders dataset.
///
/// Any of these is fatal to dashboard initialization: no views render
/// until a dataset has loaded cleanly.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read dataset")]
    Io(#[from] std::io::Error),

    #[error("dataset is empty (no header row)")]
    EmptyFile,

    #[error("dataset header is missing required column `{name}`")]
    MissingColumn { name: &'static str },

    #[error("row {line}: expected at least {expected} fields, found {found}")]
    ShortRow {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("row {line}, column `{column}`: cannot parse `{value}` as a number")]
    MalformedField {
        line: usize,
        column: &'static str,
        value: String,
    },

    #[error("row {line}: unrecognized gender `{value}`")]
    InvalidGender { line: usize, value: String },
}

/// Errors raised while loading the optional dashboard configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
