// src/core/mod.rs

/// Traits for everything outside the resolver and launcher.
pub mod capabilities;
/// Home and executable resolution.
pub mod config_resolver;
/// Builds and sends the command line.
pub mod launcher;
/// The `.vscode/settings.json` store.
pub mod settings;

#[cfg(test)]
pub(crate) mod testing;
