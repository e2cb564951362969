// src/core/capabilities.rs

//! The narrow interfaces through which the resolver and launcher reach the
//! outside world: prompts, persisted settings, the filesystem, the editing
//! context and user notifications.

use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A prompt could not be shown or read.
#[derive(Error, Debug)]
pub enum PromptError {
    /// The terminal UI failed.
    #[error("User Interface Error: {0}")]
    Dialoguer(#[from] dialoguer::Error),
}

/// Interactive pickers. `Ok(None)` means the user cancelled.
pub trait Prompter {
    /// Asks for an existing directory.
    fn prompt_for_directory(&mut self, label: &str) -> Result<Option<PathBuf>, PromptError>;

    /// Asks for an existing file.
    fn prompt_for_file(&mut self, label: &str) -> Result<Option<PathBuf>, PromptError>;

    /// Asks the user to pick one of `options`, returning its index.
    fn prompt_select_one(
        &mut self,
        prompt: &str,
        options: &[String],
    ) -> Result<Option<usize>, PromptError>;
}

/// Reading or writing the settings file failed.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// The file could not be read or written.
    #[error("Filesystem Error on '{path}': {source}")]
    Io {
        /// The settings file.
        path: String,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },
    /// The file is not JSON, even allowing comments and trailing commas.
    #[error("Settings file '{path}' is not valid JSON: {source}")]
    Parse {
        /// The settings file.
        path: String,
        /// The underlying error.
        #[source]
        source: json5::Error,
    },
    /// The settings could not be rendered as JSON.
    #[error("Could not serialize settings for '{path}': {source}")]
    Serialize {
        /// The settings file.
        path: String,
        /// The underlying error.
        #[source]
        source: serde_json::Error,
    },
    /// The file parsed, but is not a JSON object.
    #[error("Settings file '{path}' must contain a JSON object at the top level.")]
    NotAnObject {
        /// The settings file.
        path: String,
    },
}

/// Scoped, persisted key/value settings.
pub trait SettingsStore {
    /// Returns the raw stored value, untouched. Callers validate its shape.
    fn read_setting(&self, key: &str) -> Option<Value>;

    /// Stores `value` under `key` and persists it.
    fn write_setting(&mut self, key: &str, value: Value) -> Result<(), SettingsError>;
}

/// Existence checks. A path that cannot be inspected does not exist.
pub trait Filesystem {
    /// `path` is an existing directory.
    fn directory_exists(&self, path: &Path) -> bool;
    /// `path` is an existing regular file.
    fn file_exists(&self, path: &Path) -> bool;
}

/// The real filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFilesystem;

impl Filesystem for LocalFilesystem {
    fn directory_exists(&self, path: &Path) -> bool {
        !path.as_os_str().is_empty() && fs::metadata(path).is_ok_and(|m| m.is_dir())
    }

    fn file_exists(&self, path: &Path) -> bool {
        !path.as_os_str().is_empty() && fs::metadata(path).is_ok_and(|m| m.is_file())
    }
}

/// The current editing context.
pub trait ActiveFile {
    /// The file being edited, if any.
    fn active_file_path(&self) -> Option<PathBuf>;
}

/// Non-fatal messages for the user.
pub trait Notifier {
    /// Something the user may want to know, e.g. which executable was picked.
    fn info(&mut self, message: &str);

    /// Something the user should fix, e.g. a malformed setting.
    fn warn(&mut self, message: &str);
}
