// src/core/config_resolver.rs

use crate::constants::{DEFAULT_EXECUTABLE_NAME, EXECUTABLE_KEY, HOME_KEY};
use crate::core::capabilities::{Filesystem, Notifier, PromptError, Prompter, SettingsStore};
use crate::models::{DaisyConfig, NamedPath, named_paths_from_value};
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Why no [`DaisyConfig`] could be produced.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// No usable home directory, or the prompt for one was cancelled.
    #[error("Missing Daisy home.")]
    MissingHome,
    /// The prompt for an executable was cancelled.
    #[error("No Daisy executable selected.")]
    NoExecutableSelected,
    /// The chosen executable entry points at nothing.
    #[error("Daisy executable '{name}' at '{path}' does not exist.")]
    ExecutableNotFound {
        /// Label of the entry.
        name: String,
        /// Its configured path.
        path: String,
    },
    /// A prompt failed to run.
    #[error(transparent)]
    Prompt(#[from] PromptError),
}

type ResolverResult<T> = Result<T, ResolveError>;

/// Produces a validated [`DaisyConfig`] from persisted settings, asking the user
/// for whatever is missing or ambiguous.
///
/// Resolution runs in two stages, home then executable. Every prompt can be
/// cancelled, which ends resolution with the matching [`ResolveError`]. Values
/// picked by the user are written back to the settings store; a failed write is
/// logged and does not stop the run.
pub struct ConfigResolver<'a> {
    settings: &'a mut dyn SettingsStore,
    prompter: &'a mut dyn Prompter,
    filesystem: &'a dyn Filesystem,
    notifier: &'a mut dyn Notifier,
}

impl std::fmt::Debug for ConfigResolver<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigResolver").finish_non_exhaustive()
    }
}

impl<'a> ConfigResolver<'a> {
    /// A resolver over the given collaborators. Nothing is read until [`Self::resolve`].
    pub fn new(
        settings: &'a mut dyn SettingsStore,
        prompter: &'a mut dyn Prompter,
        filesystem: &'a dyn Filesystem,
        notifier: &'a mut dyn Notifier,
    ) -> Self {
        Self {
            settings,
            prompter,
            filesystem,
            notifier,
        }
    }

    /// Resolves home, then executable.
    pub fn resolve(&mut self) -> ResolverResult<DaisyConfig> {
        let home = self.resolve_home()?;
        let executable = self.resolve_executable()?;
        log::debug!(
            "Resolved Daisy config: home='{}', executable='{}'",
            home.display(),
            executable.display()
        );
        Ok(DaisyConfig { home, executable })
    }

    fn resolve_home(&mut self) -> ResolverResult<PathBuf> {
        let stored = self
            .settings
            .read_setting(HOME_KEY)
            .and_then(|value| value.as_str().map(PathBuf::from))
            .unwrap_or_default();

        if self.filesystem.directory_exists(&stored) {
            return Ok(stored);
        }

        let chosen = self
            .prompter
            .prompt_for_directory(t!("resolve.prompt.home"))?
            .ok_or(ResolveError::MissingHome)?;

        if !self.filesystem.directory_exists(&chosen) {
            log::warn!("Chosen home '{}' is not a directory.", chosen.display());
            return Err(ResolveError::MissingHome);
        }

        self.persist(HOME_KEY, &chosen.display().to_string());
        Ok(chosen)
    }

    fn resolve_executable(&mut self) -> ResolverResult<PathBuf> {
        let raw = self.settings.read_setting(EXECUTABLE_KEY);
        if let Some(value) = raw.as_ref().filter(|v| !v.is_array() && !v.is_null()) {
            log::debug!("Unusable '{}' setting: {}", EXECUTABLE_KEY, value);
            self.notifier.warn(t!("resolve.warn.executable_not_a_list"));
        }
        let candidates = raw.as_ref().map(named_paths_from_value).unwrap_or_default();
        log::debug!("Found {} valid executable entries.", candidates.len());

        match candidates.as_slice() {
            [] => self.pick_new_executable(),
            [only] => self.adopt(only),
            many => {
                let options: Vec<String> = many.iter().map(NamedPath::label).collect();
                let selected = self
                    .prompter
                    .prompt_select_one(t!("resolve.prompt.select_executable"), &options)?
                    .and_then(|index| many.get(index))
                    .ok_or(ResolveError::NoExecutableSelected)?;
                self.adopt(selected)
            }
        }
    }

    fn pick_new_executable(&mut self) -> ResolverResult<PathBuf> {
        let chosen = self
            .prompter
            .prompt_for_file(t!("resolve.prompt.executable"))?
            .ok_or(ResolveError::NoExecutableSelected)?;

        if !self.filesystem.file_exists(&chosen) {
            return Err(ResolveError::ExecutableNotFound {
                name: DEFAULT_EXECUTABLE_NAME.to_string(),
                path: chosen.display().to_string(),
            });
        }

        let entry = NamedPath::new(DEFAULT_EXECUTABLE_NAME, chosen.display().to_string());
        self.persist(EXECUTABLE_KEY, &[entry]);
        Ok(chosen)
    }

    fn adopt(&mut self, entry: &NamedPath) -> ResolverResult<PathBuf> {
        let path = PathBuf::from(&entry.path);
        if !self.filesystem.file_exists(&path) {
            return Err(ResolveError::ExecutableNotFound {
                name: entry.name.clone(),
                path: entry.path.clone(),
            });
        }

        self.notifier.info(&format!(
            t!("resolve.info.using_executable"),
            name = entry.name,
            path = entry.path
        ));
        Ok(path)
    }

    fn persist<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) {
        let json = match serde_json::to_value(value) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not serialize setting '{}': {}", key, e);
                return;
            }
        };
        if let Err(e) = self.settings.write_setting(key, json) {
            log::warn!("Could not save setting '{}': {}", key, e);
        }
    }
}
