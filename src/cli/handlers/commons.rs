// src/cli/handlers/commons.rs

// Terminal-based implementations of the capabilities, and the wiring shared by
// the handlers.

use anyhow::{Context, Result};
use colored::Colorize;
use dialoguer::{Input, Select, theme::ColorfulTheme};
use std::env;
use std::path::{Path, PathBuf};

use crate::{
    cli::args::LaunchArgs,
    core::{
        capabilities::{ActiveFile, Filesystem, LocalFilesystem, Notifier, PromptError, Prompter},
        config_resolver::ConfigResolver,
        launcher::{LaunchError, Launcher},
        settings::JsonSettingsStore,
    },
    system::shell,
};

#[derive(Debug, Clone, Copy)]
enum PathKind {
    Directory,
    File,
}

impl PathKind {
    fn accepts(self, path: &Path) -> bool {
        match self {
            Self::Directory => LocalFilesystem.directory_exists(path),
            Self::File => LocalFilesystem.file_exists(path),
        }
    }
}

/// Asks on the terminal. Typed paths may use `~` and environment variables;
/// an empty answer cancels.
#[derive(Debug, Default, Clone, Copy)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    fn prompt_for_path(&self, label: &str, kind: PathKind) -> Result<Option<PathBuf>, PromptError> {
        let input: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("{} {}", label, t!("prompt.hint.cancel").dimmed()))
            .allow_empty(true)
            .validate_with(|input: &String| -> Result<(), String> {
                if input.trim().is_empty() {
                    return Ok(());
                }
                let path = expand_path(input);
                if kind.accepts(&path) {
                    Ok(())
                } else {
                    Err(match kind {
                        PathKind::Directory => {
                            format!(t!("prompt.error.not_a_directory"), path = path.display())
                        }
                        PathKind::File => {
                            format!(t!("prompt.error.not_a_file"), path = path.display())
                        }
                    })
                }
            })
            .interact_text()?;

        if input.trim().is_empty() {
            return Ok(None);
        }
        let path = expand_path(&input);
        Ok(Some(dunce::canonicalize(&path).unwrap_or(path)))
    }
}

impl Prompter for DialoguerPrompter {
    fn prompt_for_directory(&mut self, label: &str) -> Result<Option<PathBuf>, PromptError> {
        self.prompt_for_path(label, PathKind::Directory)
    }

    fn prompt_for_file(&mut self, label: &str) -> Result<Option<PathBuf>, PromptError> {
        self.prompt_for_path(label, PathKind::File)
    }

    fn prompt_select_one(
        &mut self,
        prompt: &str,
        options: &[String],
    ) -> Result<Option<usize>, PromptError> {
        // Esc or q cancels.
        Ok(Select::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .items(options)
            .default(0)
            .interact_opt()?)
    }
}

/// Expands `~` and environment variables, falling back to the literal text.
pub fn expand_path(input: &str) -> PathBuf {
    let trimmed = input.trim();
    match shellexpand::full(trimmed) {
        Ok(expanded) => PathBuf::from(expanded.into_owned()),
        Err(e) => {
            log::debug!("Could not expand '{}': {}", trimmed, e);
            PathBuf::from(shellexpand::tilde(trimmed).into_owned())
        }
    }
}

/// Notices go to stderr so `daisy command` output stays clean.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn info(&mut self, message: &str) {
        eprintln!("{} {}", "info:".cyan().bold(), message);
    }

    fn warn(&mut self, message: &str) {
        eprintln!("{} {}", "warning:".yellow().bold(), message);
    }
}

/// The file given on the command line plays the editor's active file.
#[derive(Debug, Default, Clone)]
pub struct CliActiveFile {
    file: Option<PathBuf>,
}

impl CliActiveFile {
    /// `None` when no file was given.
    pub fn new(file: Option<PathBuf>) -> Self {
        Self { file }
    }
}

impl ActiveFile for CliActiveFile {
    fn active_file_path(&self) -> Option<PathBuf> {
        let file = self.file.as_ref()?;
        Some(dunce::canonicalize(file).unwrap_or_else(|_| file.clone()))
    }
}

/// The workspace root: the given directory, or the current one.
pub fn resolve_workspace(workspace: Option<&Path>) -> Result<PathBuf> {
    match workspace {
        Some(dir) => {
            if !dir.is_dir() {
                anyhow::bail!("Workspace '{}' does not exist.", dir.display());
            }
            Ok(dunce::canonicalize(dir)?)
        }
        None => env::current_dir().context("Could not determine the current directory"),
    }
}

/// `--shell` if given, otherwise the detected shell.
pub fn shell_path(args: &LaunchArgs) -> String {
    args.shell
        .clone()
        .unwrap_or_else(shell::current_shell_path)
}

/// Wires the terminal capabilities into a [`Launcher`] and hands it to `action`.
pub fn with_launcher<T>(
    args: &LaunchArgs,
    shell_path: &str,
    action: impl FnOnce(&mut Launcher<'_>) -> Result<T, LaunchError>,
) -> Result<T> {
    let workspace = resolve_workspace(args.workspace.as_deref())?;
    let mut settings = JsonSettingsStore::open(&workspace)?;
    log::debug!("Using settings file '{}'", settings.path().display());

    let mut prompter = DialoguerPrompter;
    let mut notifier = ConsoleNotifier;
    let filesystem = LocalFilesystem;
    let editor = CliActiveFile::new(args.file.clone());

    let resolver = ConfigResolver::new(&mut settings, &mut prompter, &filesystem, &mut notifier);
    let mut launcher = Launcher::new(resolver, &filesystem, &editor, shell_path);
    Ok(action(&mut launcher)?)
}
