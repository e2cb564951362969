//! Launches the Daisy tool against the current file.
//!
//! The crate resolves a workspace's Daisy configuration (home directory and
//! executable), builds a command line escaped for the user's shell (Bash,
//! PowerShell or cmd.exe) and hands it to a terminal.

include!(concat!(env!("OUT_DIR"), "/translations.rs"));

/// The `daisy` command line: arguments, dispatch and handlers.
pub mod cli;
/// Names shared across the crate.
pub mod constants;
/// Configuration resolution and launching, behind capability traits.
pub mod core;
/// Plain data passed between the layers.
pub mod models;
pub mod system;
