//! Error types for the transfer-engine shell.
//!
//! The engine core never fails: stale keys are dropped, out-of-range pages are
//! clamped and operations on disabled items are no-ops. Errors only arise at
//! the impure edges (reading catalogue or script files, loading config,
//! installing the tracing subscriber) and are modelled here with `thiserror`.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error returned by the binary
//!   - [`InputError`] - Catalogue/script file failures (missing file, IO, bad JSON)
//!   - [`ConfigError`](crate::config::ConfigError) - Config file read/parse failures
//!   - [`LoggingError`](crate::logging::LoggingError) - Subscriber initialisation failures

use crate::config::ConfigError;
use crate::logging::LoggingError;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all failure modes of the shell.
///
/// Domain-specific errors convert via `From`, so the binary can use `?`
/// throughout.
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to read a catalogue or intent script.
    #[error("Failed to read input: {0}")]
    Input(#[from] InputError),

    /// Config file exists but could not be read or parsed.
    #[error("Failed to load configuration: {0}")]
    Config(#[from] ConfigError),

    /// Tracing subscriber could not be installed.
    #[error("Failed to initialise logging: {0}")]
    Logging(#[from] LoggingError),

    /// Failed to write the report.
    #[error("Failed to write output: {0}")]
    Output(#[source] std::io::Error),
}

/// Errors encountered when reading JSON input files.
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use transfer_engine::model::error::InputError;
///
/// let err = InputError::FileNotFound {
///     path: PathBuf::from("/tmp/missing.json"),
/// };
/// assert!(err.to_string().contains("/tmp/missing.json"));
/// ```
#[derive(Debug, Error)]
pub enum InputError {
    /// The given path does not exist.
    #[error("File not found: {path}")]
    FileNotFound {
        /// Path that was attempted.
        path: PathBuf,
    },

    /// The file exists but could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        /// Path being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON for the expected shape.
    ///
    /// `line` and `column` come from `serde_json` and point at the first
    /// offending character.
    #[error("Invalid JSON in {path} at line {line}, column {column}: {message}")]
    Json {
        /// Path being parsed.
        path: PathBuf,
        /// 1-based line of the error.
        line: usize,
        /// 1-based column of the error.
        column: usize,
        /// Parser message.
        message: String,
    },
}

impl InputError {
    /// Wrap a `serde_json` error with the path it came from.
    pub fn json(path: impl Into<PathBuf>, err: &serde_json::Error) -> Self {
        InputError::Json {
            path: path.into(),
            line: err.line(),
            column: err.column(),
            message: err.to_string(),
        }
    }
}
