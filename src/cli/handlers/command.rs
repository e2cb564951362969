// src/cli/handlers/command.rs

use anyhow::Result;
use clap::Parser;
use std::io;

use super::commons;
use crate::{
    cli::args::LaunchArgs,
    system::{dialect::ShellKind, terminal::LineTerminal},
};

/// The main handler for the `command` command.
///
/// Same resolution as `run`, but the lines are printed to stdout for the
/// caller (an editor task, a script) to send to its own terminal.
pub fn handle(args: Vec<String>) -> Result<()> {
    let launch_args = LaunchArgs::try_parse_from(&args)?;
    let shell_path = commons::shell_path(&launch_args);

    let stdout = io::stdout();
    let mut terminal = LineTerminal::new(stdout.lock(), ShellKind::classify(&shell_path));
    let plan = commons::with_launcher(&launch_args, &shell_path, |launcher| {
        launcher.run(&mut terminal)
    })?;

    log::debug!("Printed command for terminal '{}'", plan.terminal_name);
    Ok(())
}
