//! # System Interaction Layer
//!
//! Everything that knows about command shells.
//!
//! ## Modules
//!
//! - **`dialect`**: `ShellKind` and its quoting rules for Bash, PowerShell and cmd.exe.
//! - **`command_line`**: Turns a `CommandSpec` into one line ready to type into a terminal.
//! - **`shell`**: Detects which shell the user's terminal runs.
//! - **`terminal`**: Sinks that receive finished command lines, either by feeding them to a
//!   spawned shell or by writing them out.

/// Command-line rendering.
pub mod command_line;
/// Shell dialects and their quoting.
pub mod dialect;
/// Shell detection.
pub mod shell;
/// Terminal sinks.
pub mod terminal;
