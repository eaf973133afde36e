//! Configuration file loading with precedence handling.

use crate::engine::{PaginationConfig, TransferOptions};
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "TRANSFER_ENGINE_CONFIG";

/// Environment variable overriding the page size.
pub const PAGE_SIZE_ENV_VAR: &str = "TRANSFER_ENGINE_PAGE_SIZE";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/transfer-engine/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Start with user interactions disabled.
    #[serde(default)]
    pub disabled: Option<bool>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Pagination section.
    #[serde(default)]
    pub pagination: Option<PaginationSection>,
}

/// `[pagination]` section from TOML.
///
/// ```toml
/// [pagination]
/// enabled = true
/// page_size = 20
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PaginationSection {
    /// Paginate both lists.
    #[serde(default)]
    pub enabled: Option<bool>,

    /// Items per page.
    #[serde(default)]
    pub page_size: Option<usize>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Pagination applied to both sides.
    pub pagination: PaginationConfig,
    /// Start disabled.
    pub disabled: bool,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            pagination: PaginationConfig::default(),
            disabled: false,
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// Engine options seeded from this config.
    pub fn transfer_options(&self) -> TransferOptions {
        TransferOptions {
            pagination: self.pagination,
            disabled: self.disabled,
            ..TransferOptions::default()
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/transfer-engine/transfer-engine.log` on Unix-like
/// systems, or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("transfer-engine").join("transfer-engine.log")
    } else {
        PathBuf::from("transfer-engine.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/transfer-engine/config.toml` on Unix, appropriate path
/// on other platforms. Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("transfer-engine").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `TRANSFER_ENGINE_CONFIG` environment variable
/// 3. Default path `~/.config/transfer-engine/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Apply environment variable overrides to resolved config.
///
/// Checks `TRANSFER_ENGINE_PAGE_SIZE`. Values that are not a positive
/// integer are logged and ignored.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(raw) = std::env::var(PAGE_SIZE_ENV_VAR) {
        match raw.trim().parse::<usize>() {
            Ok(size) if size > 0 => config.pagination.page_size = size,
            _ => warn!(value = %raw, "ignoring invalid {PAGE_SIZE_ENV_VAR}"),
        }
    }

    config
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    let section = config.pagination.unwrap_or_default();

    ResolvedConfig {
        pagination: PaginationConfig {
            enabled: section.enabled.unwrap_or(defaults.pagination.enabled),
            page_size: section.page_size.unwrap_or(defaults.pagination.page_size),
        },
        disabled: config.disabled.unwrap_or(defaults.disabled),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply CLI argument overrides to resolved config.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
///
/// An explicit `--page-size` turns pagination on; `--no-pagination` wins
/// over both.
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    page_size_override: Option<usize>,
    no_pagination: bool,
) -> ResolvedConfig {
    if let Some(size) = page_size_override {
        config.pagination.page_size = size;
        config.pagination.enabled = true;
    }

    if no_pagination {
        config.pagination.enabled = false;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
