// src/cli/args.rs
use clap::Parser;
use std::path::PathBuf;

/// Arguments shared by `run` and `command`.
#[derive(Parser, Debug, Default)]
#[command(no_binary_name = true)]
pub struct LaunchArgs {
    /// The file to run Daisy on (the "active file").
    pub file: Option<PathBuf>,

    /// Workspace whose `.vscode/settings.json` holds the Daisy settings. Defaults to the current directory.
    #[arg(long, short)]
    pub workspace: Option<PathBuf>,

    /// Path of the shell the command is built for and run in.
    #[arg(long)]
    pub shell: Option<String>,
}

/// Arguments of `executables`.
#[derive(Parser, Debug, Default)]
#[command(no_binary_name = true)]
pub struct ExecutablesArgs {
    /// Workspace whose settings to show. Defaults to the current directory.
    #[arg(long, short)]
    pub workspace: Option<PathBuf>,
}
