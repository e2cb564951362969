// src/cli/handlers/run.rs

use anyhow::Result;
use clap::Parser;

use super::commons;
use crate::{cli::args::LaunchArgs, system::terminal::ShellTerminal};

/// The main handler for the `run` command.
///
/// Resolves the configuration (prompting when needed), then types the command
/// into a fresh shell. The tool's exit code is not inspected.
pub fn handle(args: Vec<String>) -> Result<()> {
    let launch_args = LaunchArgs::try_parse_from(&args)?;
    let shell_path = commons::shell_path(&launch_args);

    let mut terminal = ShellTerminal::new(shell_path.clone());
    commons::with_launcher(&launch_args, &shell_path, |launcher| {
        launcher.run(&mut terminal)
    })?;

    Ok(())
}
