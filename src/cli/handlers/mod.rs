// src/cli/handlers/mod.rs

// One module per CLI action.

/// `daisy command`: print the lines instead of running them.
pub mod command;
/// Terminal-backed capabilities and launcher wiring.
pub mod commons;
/// `daisy executables`: show the configured home and executables.
pub mod executables;
/// `daisy run`: run Daisy in a new shell.
pub mod run;
