// src/cli/handlers/executables.rs

use anyhow::Result;
use clap::Parser;
use colored::*;
use std::path::Path;

use super::commons;
use crate::{
    cli::args::ExecutablesArgs,
    constants::{EXECUTABLE_KEY, HOME_KEY},
    core::{
        capabilities::{Filesystem, LocalFilesystem, SettingsStore},
        settings::JsonSettingsStore,
    },
    models::named_paths_from_value,
};

/// The main handler for the `executables` command.
///
/// Read-only: shows what `run` would start from, without prompting or writing.
pub fn handle(args: Vec<String>) -> Result<()> {
    let list_args = ExecutablesArgs::try_parse_from(&args)?;
    let workspace = commons::resolve_workspace(list_args.workspace.as_deref())?;
    let settings = JsonSettingsStore::open(&workspace)?;
    let filesystem = LocalFilesystem;

    println!(
        "{}: {}",
        t!("executables.title.settings").bold(),
        settings.path().display()
    );

    let home = settings
        .read_setting(HOME_KEY)
        .and_then(|v| v.as_str().map(str::to_string))
        .filter(|h| !h.is_empty());
    match home {
        Some(home) => println!(
            "{}: {} {}",
            t!("executables.title.home").bold(),
            home,
            status(filesystem.directory_exists(Path::new(&home)))
        ),
        None => println!(
            "{}: {}",
            t!("executables.title.home").bold(),
            t!("executables.status.unset").dimmed()
        ),
    }

    let raw = settings.read_setting(EXECUTABLE_KEY);
    let entries = raw.as_ref().map(named_paths_from_value).unwrap_or_default();
    let raw_count = raw
        .as_ref()
        .and_then(|v| v.as_array())
        .map_or(0, |items| items.len());

    println!("\n{}:", t!("executables.title.executables").bold());
    if entries.is_empty() {
        println!("  {}", t!("executables.info.none").yellow());
    }

    let name_width = entries.iter().map(|e| e.name.len()).max().unwrap_or(0);
    for entry in &entries {
        println!(
            "  {:<width$}  {}  {}",
            entry.name.cyan(),
            entry.path,
            status(filesystem.file_exists(Path::new(&entry.path))),
            width = name_width
        );
    }

    let skipped = raw_count.saturating_sub(entries.len());
    if skipped > 0 {
        println!(
            "\n{}",
            format!(t!("executables.info.skipped"), count = skipped).dimmed()
        );
    }

    Ok(())
}

fn status(exists: bool) -> ColoredString {
    if exists {
        format!("[{}]", t!("executables.status.ok")).green()
    } else {
        format!("[{}]", t!("executables.status.missing")).red()
    }
}
