//! Tracing subscriber initialization.
//!
//! The engine itself only emits `tracing` events. The binary routes them to
//! a log file so that stdout stays reserved for the JSON report.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Filter directive used when neither env var is set.
pub const DEFAULT_DIRECTIVE: &str = "info";

/// Crate-specific filter variable, checked before `RUST_LOG`.
pub const LOG_ENV_VAR: &str = "TRANSFER_ENGINE_LOG";

/// Error type for logging initialization failures.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Failed to create log directory
    #[error("Failed to create log directory at {path:?}: {source}")]
    DirectoryCreation {
        /// The directory path that failed to be created
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Invalid log file path (no filename component)
    #[error("Invalid log file path: {0:?}")]
    InvalidPath(PathBuf),

    /// Tracing subscriber already initialized
    #[error("Tracing subscriber already initialized")]
    SubscriberAlreadySet,
}

/// Log file location split into directory and file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogTarget {
    /// Directory holding the log file (created if missing).
    pub directory: PathBuf,
    /// File name inside `directory`.
    pub file_name: String,
}

/// Validate `log_path` and create its parent directory.
///
/// A bare file name logs into the current directory.
///
/// # Errors
///
/// Fails when the path has no UTF-8 file name or the directory cannot be
/// created.
pub fn prepare_log_target(log_path: &Path) -> Result<LogTarget, LoggingError> {
    let file_name = log_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| LoggingError::InvalidPath(log_path.to_path_buf()))?
        .to_string();

    let directory = match log_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    std::fs::create_dir_all(&directory).map_err(|source| LoggingError::DirectoryCreation {
        path: directory.clone(),
        source,
    })?;

    Ok(LogTarget {
        directory,
        file_name,
    })
}

/// Initialize the tracing subscriber with file-based logging.
///
/// Filter precedence: `TRANSFER_ENGINE_LOG`, then `RUST_LOG`, then
/// [`DEFAULT_DIRECTIVE`].
///
/// # Errors
///
/// Returns `Err(LoggingError)` if the path is unusable or a global
/// subscriber was already installed.
pub fn init(log_path: &Path) -> Result<(), LoggingError> {
    use tracing_subscriber::EnvFilter;

    let target = prepare_log_target(log_path)?;
    let file_appender = tracing_appender::rolling::never(&target.directory, &target.file_name);

    let env_filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(file_appender)
        .with_ansi(false) // No ANSI colors in log files
        .try_init()
        .map_err(|_| LoggingError::SubscriberAlreadySet)
}
