//! JSON input sources.
//!
//! The binary reads two documents:
//! - a catalogue: a JSON array of items
//! - an optional intent script: a JSON array of intents, from a file or stdin
//!
//! Parsing happens at this boundary; the engine only ever sees typed values.

use crate::integration::Intent;
use crate::model::error::InputError;
use crate::model::{Item, OptionStore};
use serde::de::DeserializeOwned;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::info;

/// Where the intent script comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptSource {
    /// No script: report the initial state only.
    None,
    /// Read from a file.
    File(PathBuf),
    /// Read from stdin (`--script -`).
    Stdin,
}

impl ScriptSource {
    /// Interpret the `--script` argument; `-` means stdin.
    pub fn from_arg(arg: Option<PathBuf>) -> Self {
        match arg {
            None => ScriptSource::None,
            Some(path) if path.as_os_str() == "-" => ScriptSource::Stdin,
            Some(path) => ScriptSource::File(path),
        }
    }

    /// Load the intents.
    ///
    /// # Errors
    ///
    /// Propagates file and JSON errors.
    pub fn load(&self) -> Result<Vec<Intent>, InputError> {
        match self {
            ScriptSource::None => Ok(Vec::new()),
            ScriptSource::File(path) => read_json_file(path),
            ScriptSource::Stdin => {
                let mut raw = String::new();
                std::io::stdin()
                    .read_to_string(&mut raw)
                    .map_err(|source| InputError::Io {
                        path: PathBuf::from("<stdin>"),
                        source,
                    })?;
                parse_json(Path::new("<stdin>"), &raw)
            }
        }
    }
}

/// Read a catalogue file into an [`OptionStore`].
///
/// # Errors
///
/// Returns `InputError::FileNotFound` if the file does not exist,
/// `InputError::Io` for read failures and `InputError::Json` for bad JSON.
pub fn read_catalogue(path: &Path) -> Result<OptionStore, InputError> {
    let items: Vec<Item> = read_json_file(path)?;
    let count = items.len();
    let store = OptionStore::new(items);
    info!(path = %path.display(), items = count, unique = store.len(), "catalogue loaded");
    Ok(store)
}

/// Read and deserialize a JSON file.
///
/// # Errors
///
/// See [`read_catalogue`].
pub fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T, InputError> {
    if !path.exists() {
        return Err(InputError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let raw = std::fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_json(path, &raw)
}

fn parse_json<T: DeserializeOwned>(path: &Path, raw: &str) -> Result<T, InputError> {
    serde_json::from_str(raw).map_err(|e| InputError::json(path, &e))
}
