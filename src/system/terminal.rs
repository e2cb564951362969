// src/system/terminal.rs

use super::{command_line, dialect::ShellKind};
use colored::Colorize;
use std::io::{self, Write};
use std::process::{Command, Stdio};
use thiserror::Error;

/// Failures while handing lines to a terminal.
#[derive(Error, Debug)]
pub enum TerminalError {
    /// The shell process could not be started.
    #[error("Could not start shell '{shell}': {source}")]
    Spawn {
        /// Path of the shell.
        shell: String,
        /// The underlying error.
        #[source]
        source: io::Error,
    },
    /// Writing to the terminal failed.
    #[error("Could not send text to terminal '{name}': {source}")]
    Send {
        /// Name of the terminal.
        name: String,
        /// The underlying error.
        #[source]
        source: io::Error,
    },
}

/// Where a finished command line goes.
///
/// `name` identifies the terminal; implementations that keep terminals alive
/// reuse the one with the same name.
pub trait Terminal {
    /// Sends `text` as one line to the terminal called `name`.
    fn send_text(&mut self, name: &str, text: &str) -> Result<(), TerminalError>;

    /// Sends a `cd` into `directory`, then `text`.
    fn change_directory_then_send(
        &mut self,
        name: &str,
        directory: &str,
        text: &str,
    ) -> Result<(), TerminalError>;
}

/// Runs the lines in a freshly spawned shell, as if entered at its prompt.
///
/// The lines are joined into one script and handed to the shell as its command
/// argument (`-c`, `-Command` or `/C`). The shell and the tool it starts keep
/// the user's stdin, so an interactive Daisy session still reads the keyboard.
/// The call returns once the shell has exited.
#[derive(Debug, Clone)]
pub struct ShellTerminal {
    shell_path: String,
    kind: ShellKind,
}

impl ShellTerminal {
    /// A terminal running `shell_path`, speaking the dialect it classifies as.
    pub fn new(shell_path: impl Into<String>) -> Self {
        let shell_path = shell_path.into();
        let kind = ShellKind::classify(&shell_path);
        Self { shell_path, kind }
    }

    /// The dialect the lines must be written in.
    pub fn kind(&self) -> ShellKind {
        self.kind
    }

    fn send_lines(&mut self, name: &str, lines: &[String]) -> Result<(), TerminalError> {
        println!("\n--- {} ---", name.yellow().bold());

        let script = join_script(self.kind, lines);
        log::debug!("[{}] > {}", name, script);

        let mut command = Command::new(&self.shell_path);
        add_script_args(&mut command, self.kind, &script);

        let status = command
            .stdin(Stdio::inherit())
            .status()
            .map_err(|source| TerminalError::Spawn {
                shell: self.shell_path.clone(),
                source,
            })?;

        if !status.success() {
            log::warn!("Shell for terminal '{}' exited with code: {:?}", name, status.code());
        }
        Ok(())
    }
}

impl Terminal for ShellTerminal {
    fn send_text(&mut self, name: &str, text: &str) -> Result<(), TerminalError> {
        self.send_lines(name, &[text.to_string()])
    }

    fn change_directory_then_send(
        &mut self,
        name: &str,
        directory: &str,
        text: &str,
    ) -> Result<(), TerminalError> {
        let cd = command_line::build_change_directory(directory, self.kind);
        self.send_lines(name, &[cd, text.to_string()])
    }
}

/// Joins lines into one script. Each line runs only if the previous succeeded,
/// like typing them one by one and stopping at the first failure.
fn join_script(kind: ShellKind, lines: &[String]) -> String {
    let separator = match kind {
        ShellKind::Bash | ShellKind::Cmd => " && ",
        ShellKind::PowerShell => "; if ($?) { ",
    };
    let mut script = lines.join(separator);
    if kind == ShellKind::PowerShell {
        script.push_str(&" }".repeat(lines.len().saturating_sub(1)));
    }
    script
}

fn add_script_args(command: &mut Command, kind: ShellKind, script: &str) {
    match kind {
        ShellKind::Bash => {
            command.arg("-c").arg(script);
        }
        ShellKind::PowerShell => {
            command.args(["-NoLogo", "-NoProfile", "-Command"]).arg(script);
        }
        ShellKind::Cmd => {
            command.args(["/D", "/Q", "/C"]);
            // cmd.exe parses its own command line; argv quoting would mangle `"` and `^`.
            #[cfg(windows)]
            {
                use std::os::windows::process::CommandExt;
                command.raw_arg(script);
            }
            #[cfg(not(windows))]
            command.arg(script);
        }
    }
}

/// Writes each line to `writer` instead of running it. Backs `daisy command`.
#[derive(Debug)]
pub struct LineTerminal<W: Write> {
    writer: W,
    kind: ShellKind,
}

impl<W: Write> LineTerminal<W> {
    /// Lines are written in `kind`'s dialect, one per `writeln!`.
    pub fn new(writer: W, kind: ShellKind) -> Self {
        Self { writer, kind }
    }

    /// Gives back the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_line(&mut self, name: &str, line: &str) -> Result<(), TerminalError> {
        writeln!(self.writer, "{}", line).map_err(|source| TerminalError::Send {
            name: name.to_string(),
            source,
        })
    }
}

impl<W: Write> Terminal for LineTerminal<W> {
    fn send_text(&mut self, name: &str, text: &str) -> Result<(), TerminalError> {
        self.write_line(name, text)
    }

    fn change_directory_then_send(
        &mut self,
        name: &str,
        directory: &str,
        text: &str,
    ) -> Result<(), TerminalError> {
        let cd = command_line::build_change_directory(directory, self.kind);
        self.write_line(name, &cd)?;
        self.write_line(name, text)
    }
}
