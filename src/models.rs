// src/models.rs

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;

/// One candidate location of the Daisy executable, with a human-readable label.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NamedPath {
    /// Label shown to the user.
    pub name: String,
    /// Path of the executable.
    pub path: String,
}

impl NamedPath {
    /// Builds an entry from anything string-like.
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    /// The text shown for this entry in the selection list: `name (path)`.
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.path)
    }

    fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.path.is_empty()
    }
}

/// The resolved runtime configuration.
///
/// Only ever constructed once `home` was confirmed to be an existing directory
/// and `executable` an existing file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaisyConfig {
    /// The Daisy home directory.
    pub home: PathBuf,
    /// The Daisy executable.
    pub executable: PathBuf,
}

/// Filters an untrusted settings value down to the well-formed `NamedPath` entries.
///
/// Anything that is not a JSON array yields no entries. Inside an array, items
/// that are not objects, lack `name` or `path`, carry non-string values, or have
/// an empty field are dropped.
pub fn named_paths_from_value(value: &Value) -> Vec<NamedPath> {
    let Some(items) = value.as_array() else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| NamedPath::deserialize(item).ok())
        .filter(NamedPath::is_complete)
        .collect()
}
