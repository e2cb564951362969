// src/core/launcher.rs

use crate::constants::{HOME_ENV_VAR, TERMINAL_NAME};
use crate::core::capabilities::{ActiveFile, Filesystem};
use crate::core::config_resolver::{ConfigResolver, ResolveError};
use crate::models::DaisyConfig;
use crate::system::command_line::{self, CommandSpec};
use crate::system::dialect::ShellKind;
use crate::system::terminal::{Terminal, TerminalError};
use std::path::Path;
use thiserror::Error;

/// Why nothing was sent to the terminal.
#[derive(Error, Debug)]
pub enum LaunchError {
    /// Configuration resolution failed.
    #[error("Unable to run Daisy due to missing configuration: {0}")]
    Unresolved(#[from] ResolveError),
    /// There is no file to run Daisy on.
    #[error("Unable to get path to current file.")]
    NoActiveFile,
    /// The terminal did not accept the lines.
    #[error(transparent)]
    Terminal(#[from] TerminalError),
}

/// Everything decided for one run, before anything is sent to a terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchPlan {
    /// The resolved configuration.
    pub config: DaisyConfig,
    /// The line to type, escaped for the shell.
    pub command_line: String,
    /// Set when the terminal should `cd` first, i.e. the home directory exists.
    pub working_directory: Option<String>,
    /// See [`terminal_name`].
    pub terminal_name: String,
}

/// The terminal name for a shell, e.g. `Daisy (powershell)`, so a terminal
/// running one shell is never reused for another.
pub fn terminal_name(kind: ShellKind) -> String {
    format!("{} ({})", TERMINAL_NAME, kind)
}

/// Runs Daisy on the active file: resolve the configuration, build the command
/// line for the current shell, hand it to a terminal.
pub struct Launcher<'a> {
    resolver: ConfigResolver<'a>,
    filesystem: &'a dyn Filesystem,
    editor: &'a dyn ActiveFile,
    shell: ShellKind,
}

impl std::fmt::Debug for Launcher<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Launcher")
            .field("shell", &self.shell)
            .finish_non_exhaustive()
    }
}

impl<'a> Launcher<'a> {
    /// `shell_path` is the path of the shell the terminal runs.
    pub fn new(
        resolver: ConfigResolver<'a>,
        filesystem: &'a dyn Filesystem,
        editor: &'a dyn ActiveFile,
        shell_path: &str,
    ) -> Self {
        let shell = ShellKind::classify(shell_path);
        log::debug!("Shell '{}' classified as {}", shell_path, shell);
        Self {
            resolver,
            filesystem,
            editor,
            shell,
        }
    }

    /// The dialect of the target shell.
    pub fn shell(&self) -> ShellKind {
        self.shell
    }

    /// Resolves and builds, without touching a terminal.
    pub fn prepare(&mut self) -> Result<LaunchPlan, LaunchError> {
        let config = self.resolver.resolve()?;
        let active_file = self
            .editor
            .active_file_path()
            .ok_or(LaunchError::NoActiveFile)?;

        let home = config.home.display().to_string();
        let spec = CommandSpec {
            command: config.executable.display().to_string(),
            working_directory: Some(home.clone()),
            arguments: vec![active_file.display().to_string()],
            env_var_name: HOME_ENV_VAR.to_string(),
            env_var_value: home,
        };

        let command_line = command_line::build(&spec, self.shell);
        log::debug!("Built command line: {}", command_line);

        let working_directory = spec
            .working_directory
            .filter(|dir| self.filesystem.directory_exists(Path::new(dir)));

        Ok(LaunchPlan {
            config,
            command_line,
            working_directory,
            terminal_name: terminal_name(self.shell),
        })
    }

    /// Prepares the run and sends it to `terminal`. Does not wait on the tool.
    pub fn run(&mut self, terminal: &mut dyn Terminal) -> Result<LaunchPlan, LaunchError> {
        let plan = self.prepare()?;
        match &plan.working_directory {
            Some(dir) => {
                terminal.change_directory_then_send(&plan.terminal_name, dir, &plan.command_line)?
            }
            None => terminal.send_text(&plan.terminal_name, &plan.command_line)?,
        }
        Ok(plan)
    }
}
