// src/core/settings.rs

use crate::constants::{SETTINGS_DIR, SETTINGS_FILENAME, SETTINGS_SCOPE};
use crate::core::capabilities::{SettingsError, SettingsStore};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Workspace settings kept in `<workspace>/.vscode/settings.json`.
///
/// Keys are stored flat with the scope as a dotted prefix (`Daisy.home`), the
/// layout the editor itself uses, so both sides read and write the same file.
/// Keys outside the scope are kept, in their original order.
///
/// The editor allows comments and trailing commas in this file. Both are read,
/// but a write-back emits plain JSON and loses them.
#[derive(Debug)]
pub struct JsonSettingsStore {
    path: PathBuf,
    scope: String,
    root: Map<String, Value>,
    /// The file on disk uses syntax plain JSON lacks.
    relaxed_syntax: bool,
}

impl JsonSettingsStore {
    /// Opens the settings of the workspace rooted at `workspace`.
    pub fn open(workspace: &Path) -> Result<Self, SettingsError> {
        let path = workspace.join(SETTINGS_DIR).join(SETTINGS_FILENAME);
        Self::open_file(path, SETTINGS_SCOPE)
    }

    /// Opens an explicit settings file. A missing file is an empty store.
    pub fn open_file(path: PathBuf, scope: &str) -> Result<Self, SettingsError> {
        let (root, relaxed_syntax) = if path.exists() {
            let content = fs::read_to_string(&path).map_err(|source| SettingsError::Io {
                path: path.display().to_string(),
                source,
            })?;
            parse_root(&path, &content)?
        } else {
            log::debug!("No settings file at '{}', starting empty.", path.display());
            (Map::new(), false)
        };

        Ok(Self {
            path,
            scope: scope.to_string(),
            root,
            relaxed_syntax,
        })
    }

    /// The settings file, whether or not it exists yet.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn scoped_key(&self, key: &str) -> String {
        format!("{}.{}", self.scope, key)
    }

    fn save(&mut self) -> Result<(), SettingsError> {
        let io_error = |source| SettingsError::Io {
            path: self.path.display().to_string(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(io_error)?;
        }

        let mut content = serde_json::to_string_pretty(&self.root).map_err(|source| {
            SettingsError::Serialize {
                path: self.path.display().to_string(),
                source,
            }
        })?;
        content.push('\n');

        if self.relaxed_syntax {
            log::warn!(
                "Rewriting '{}' as plain JSON: its comments and trailing commas are not kept.",
                self.path.display()
            );
        }
        fs::write(&self.path, content).map_err(io_error)?;
        self.relaxed_syntax = false;
        Ok(())
    }
}

/// Parses the file as JSON5, a superset of the editor's JSON-with-comments.
/// The flag is set when strict JSON would have rejected it.
fn parse_root(path: &Path, content: &str) -> Result<(Map<String, Value>, bool), SettingsError> {
    if content.trim().is_empty() {
        return Ok((Map::new(), false));
    }

    let (value, relaxed_syntax) = match serde_json::from_str::<Value>(content) {
        Ok(value) => (value, false),
        Err(strict_error) => {
            log::debug!(
                "'{}' is not strict JSON ({}), reading it as JSON with comments.",
                path.display(),
                strict_error
            );
            let value = json5::from_str::<Value>(content).map_err(|source| SettingsError::Parse {
                path: path.display().to_string(),
                source,
            })?;
            (value, true)
        }
    };

    match value {
        Value::Object(map) => Ok((map, relaxed_syntax)),
        _ => Err(SettingsError::NotAnObject {
            path: path.display().to_string(),
        }),
    }
}

impl SettingsStore for JsonSettingsStore {
    fn read_setting(&self, key: &str) -> Option<Value> {
        self.root.get(&self.scoped_key(key)).cloned()
    }

    fn write_setting(&mut self, key: &str, value: Value) -> Result<(), SettingsError> {
        let scoped = self.scoped_key(key);
        log::debug!("Writing setting '{}' to '{}'", scoped, self.path.display());
        self.root.insert(scoped, value);
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_missing_file_reads_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonSettingsStore::open(dir.path()).unwrap();

        assert_eq!(store.read_setting("home"), None);
        assert_eq!(
            store.path(),
            dir.path().join(".vscode").join("settings.json")
        );
    }

    #[test]
    fn test_reads_scoped_dotted_keys() {
        let dir = tempfile::tempdir().unwrap();
        let settings_dir = dir.path().join(".vscode");
        fs::create_dir_all(&settings_dir).unwrap();
        fs::write(
            settings_dir.join("settings.json"),
            r#"{ "home": "not mine", "Daisy.home": "/opt/daisy", "Daisy.executable": [] }"#,
        )
        .unwrap();

        let store = JsonSettingsStore::open(dir.path()).unwrap();

        assert_eq!(store.read_setting("home"), Some(json!("/opt/daisy")));
        assert_eq!(store.read_setting("executable"), Some(json!([])));
    }

    #[test]
    fn test_write_creates_file_and_keeps_other_keys_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let settings_dir = dir.path().join(".vscode");
        fs::create_dir_all(&settings_dir).unwrap();
        let file = settings_dir.join("settings.json");
        fs::write(&file, r#"{ "editor.tabSize": 4, "Daisy.home": "/old", "files.eol": "\n" }"#)
            .unwrap();

        let mut store = JsonSettingsStore::open(dir.path()).unwrap();
        store.write_setting("home", json!("/new")).unwrap();
        store
            .write_setting("executable", json!([{ "name": "default", "path": "/bin/daisy" }]))
            .unwrap();

        let reopened = JsonSettingsStore::open(dir.path()).unwrap();
        assert_eq!(reopened.read_setting("home"), Some(json!("/new")));

        let raw: Value = serde_json::from_str(&fs::read_to_string(&file).unwrap()).unwrap();
        let keys: Vec<&str> = raw.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec!["editor.tabSize", "Daisy.home", "files.eol", "Daisy.executable"]
        );
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("settings.json");
        fs::write(&file, "{ \"Daisy.home\": ").unwrap();

        let result = JsonSettingsStore::open_file(file, "Daisy");

        assert!(matches!(result, Err(SettingsError::Parse { .. })));
    }

    #[test]
    fn test_non_object_root_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("settings.json");
        fs::write(&file, "[1, 2, 3]").unwrap();

        let result = JsonSettingsStore::open_file(file, "Daisy");

        assert!(matches!(result, Err(SettingsError::NotAnObject { .. })));
    }

    #[test]
    fn test_empty_file_is_an_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("settings.json");
        fs::write(&file, "  \n").unwrap();

        let store = JsonSettingsStore::open_file(file, "Daisy").unwrap();

        assert_eq!(store.read_setting("home"), None);
    }

    #[test]
    fn test_reads_comments_and_trailing_commas() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("settings.json");
        fs::write(
            &file,
            "{\n  // Daisy setup\n  \"Daisy.home\": \"/opt/daisy\",\n  /* tools */\n  \"Daisy.executable\": [\n    { \"name\": \"release\", \"path\": \"/opt/daisy/bin/daisy\", },\n  ],\n}\n",
        )
        .unwrap();

        let store = JsonSettingsStore::open_file(file, "Daisy").unwrap();

        assert_eq!(store.read_setting("home"), Some(json!("/opt/daisy")));
        assert_eq!(
            store.read_setting("executable"),
            Some(json!([{ "name": "release", "path": "/opt/daisy/bin/daisy" }]))
        );
        assert!(store.relaxed_syntax);
    }

    #[test]
    fn test_write_back_of_commented_file_keeps_values_as_plain_json() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("settings.json");
        fs::write(
            &file,
            "{\n  // editor\n  \"editor.tabSize\": 2,\n  \"Daisy.home\": \"/old\",\n}\n",
        )
        .unwrap();

        let mut store = JsonSettingsStore::open_file(file.clone(), "Daisy").unwrap();
        store.write_setting("home", json!("/new")).unwrap();
        assert!(!store.relaxed_syntax);

        let raw: Value = serde_json::from_str(&fs::read_to_string(&file).unwrap()).unwrap();
        assert_eq!(raw, json!({ "editor.tabSize": 2, "Daisy.home": "/new" }));
    }

    #[test]
    fn test_plain_json_is_not_flagged_as_relaxed() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("settings.json");
        fs::write(&file, r#"{ "Daisy.home": "/opt/daisy" }"#).unwrap();

        let store = JsonSettingsStore::open_file(file, "Daisy").unwrap();

        assert!(!store.relaxed_syntax);
    }
}
