// src/system/shell.rs

use crate::constants::SHELL_OVERRIDE_ENV_VAR;
use std::env;

/// Returns the path of the shell Daisy's terminal will use.
///
/// Precedence: `DAISY_SHELL`, then the platform's shell variable (`COMSPEC` on
/// Windows, `SHELL` elsewhere), then the platform default.
pub fn current_shell_path() -> String {
    shell_path_from(|key| env::var(key).ok())
}

/// Shell detection over an arbitrary variable lookup.
pub fn shell_path_from(lookup: impl Fn(&str) -> Option<String>) -> String {
    let platform_var = if cfg!(target_os = "windows") {
        "COMSPEC"
    } else {
        "SHELL"
    };

    [SHELL_OVERRIDE_ENV_VAR, platform_var]
        .into_iter()
        .filter_map(&lookup)
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
        .unwrap_or_else(|| get_default_shell_path().to_string())
}

/// The shell used when nothing in the environment names one.
pub fn get_default_shell_path() -> &'static str {
    if cfg!(target_os = "windows") {
        "cmd.exe"
    } else {
        "/bin/bash"
    }
}
