// src/bin/daisy.rs

//! The `daisy` executable.

use clap::Parser;
use colored::*;
use daisy::cli::{Cli, dispatcher};

/// Sets up logging, parses arguments, dispatches to the handler and reports
/// any failure in one place.
fn main() {
    env_logger::init();

    if let Err(e) = dispatcher::dispatch(Cli::parse().args) {
        // Handler argument errors (including `daisy run --help`) are rendered by clap itself.
        if let Some(clap_err) = e.downcast_ref::<clap::Error>() {
            clap_err.exit();
        }

        eprintln!("\n{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}
