// src/core/testing.rs
//
// In-memory stand-ins for the capabilities, shared by the core unit tests.

use crate::core::capabilities::{
    ActiveFile, Filesystem, Notifier, PromptError, Prompter, SettingsError, SettingsStore,
};
use crate::system::terminal::{Terminal, TerminalError};
use serde_json::Value;
use std::collections::{HashMap, HashSet, VecDeque};
use std::path::{Path, PathBuf};

/// Answers prompts from queues. An empty queue answers with a cancel.
#[derive(Debug, Default)]
pub(crate) struct ScriptedPrompter {
    pub(crate) directories: VecDeque<Option<PathBuf>>,
    pub(crate) files: VecDeque<Option<PathBuf>>,
    pub(crate) selections: VecDeque<Option<usize>>,
    pub(crate) directory_prompts: usize,
    pub(crate) file_prompts: usize,
    pub(crate) select_prompts: Vec<Vec<String>>,
}

impl ScriptedPrompter {
    pub(crate) fn prompt_count(&self) -> usize {
        self.directory_prompts + self.file_prompts + self.select_prompts.len()
    }
}

impl Prompter for ScriptedPrompter {
    fn prompt_for_directory(&mut self, _label: &str) -> Result<Option<PathBuf>, PromptError> {
        self.directory_prompts += 1;
        Ok(self.directories.pop_front().flatten())
    }

    fn prompt_for_file(&mut self, _label: &str) -> Result<Option<PathBuf>, PromptError> {
        self.file_prompts += 1;
        Ok(self.files.pop_front().flatten())
    }

    fn prompt_select_one(
        &mut self,
        _prompt: &str,
        options: &[String],
    ) -> Result<Option<usize>, PromptError> {
        self.select_prompts.push(options.to_vec());
        Ok(self.selections.pop_front().flatten())
    }
}

#[derive(Debug, Default)]
pub(crate) struct MemorySettings {
    values: HashMap<String, Value>,
    pub(crate) writes: Vec<(String, Value)>,
    pub(crate) fail_writes: bool,
}

impl MemorySettings {
    /// Seeds a value without recording it as a write.
    pub(crate) fn set(&mut self, key: &str, value: Value) {
        self.values.insert(key.to_string(), value);
    }
}

impl SettingsStore for MemorySettings {
    fn read_setting(&self, key: &str) -> Option<Value> {
        self.values.get(key).cloned()
    }

    fn write_setting(&mut self, key: &str, value: Value) -> Result<(), SettingsError> {
        if self.fail_writes {
            return Err(SettingsError::Io {
                path: "memory".to_string(),
                source: std::io::Error::other("read-only"),
            });
        }
        self.values.insert(key.to_string(), value.clone());
        self.writes.push((key.to_string(), value));
        Ok(())
    }
}

#[derive(Debug, Default)]
pub(crate) struct FakeFilesystem {
    dirs: HashSet<PathBuf>,
    files: HashSet<PathBuf>,
}

impl FakeFilesystem {
    pub(crate) fn with_dir(mut self, path: &str) -> Self {
        self.dirs.insert(PathBuf::from(path));
        self
    }

    pub(crate) fn with_file(mut self, path: &str) -> Self {
        self.files.insert(PathBuf::from(path));
        self
    }
}

impl Filesystem for FakeFilesystem {
    fn directory_exists(&self, path: &Path) -> bool {
        self.dirs.contains(path)
    }

    fn file_exists(&self, path: &Path) -> bool {
        self.files.contains(path)
    }
}

#[derive(Debug, Default)]
pub(crate) struct RecordingNotifier {
    pub(crate) messages: Vec<String>,
    pub(crate) warnings: Vec<String>,
}

impl Notifier for RecordingNotifier {
    fn info(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }

    fn warn(&mut self, message: &str) {
        self.warnings.push(message.to_string());
    }
}

#[derive(Debug, Default)]
pub(crate) struct FixedActiveFile(pub(crate) Option<PathBuf>);

impl ActiveFile for FixedActiveFile {
    fn active_file_path(&self) -> Option<PathBuf> {
        self.0.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Sent {
    Text {
        name: String,
        text: String,
    },
    ChangeDirectoryThenText {
        name: String,
        directory: String,
        text: String,
    },
}

#[derive(Debug, Default)]
pub(crate) struct RecordingTerminal {
    pub(crate) sent: Vec<Sent>,
}

impl Terminal for RecordingTerminal {
    fn send_text(&mut self, name: &str, text: &str) -> Result<(), TerminalError> {
        self.sent.push(Sent::Text {
            name: name.to_string(),
            text: text.to_string(),
        });
        Ok(())
    }

    fn change_directory_then_send(
        &mut self,
        name: &str,
        directory: &str,
        text: &str,
    ) -> Result<(), TerminalError> {
        self.sent.push(Sent::ChangeDirectoryThenText {
            name: name.to_string(),
            directory: directory.to_string(),
            text: text.to_string(),
        });
        Ok(())
    }
}
