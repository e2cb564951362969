// src/constants.rs

/// The scope under which Daisy settings are stored (`Daisy.home`, `Daisy.executable`).
pub const SETTINGS_SCOPE: &str = "Daisy";

/// The directory, relative to the workspace root, that holds the settings file.
pub const SETTINGS_DIR: &str = ".vscode";

/// The workspace settings file (inside `.vscode/`).
pub const SETTINGS_FILENAME: &str = "settings.json";

/// Settings key for the Daisy home directory.
pub const HOME_KEY: &str = "home";

/// Settings key for the list of named Daisy executables.
pub const EXECUTABLE_KEY: &str = "executable";

/// Name given to an executable picked when none was configured.
pub const DEFAULT_EXECUTABLE_NAME: &str = "default";

/// Environment variable through which the launched tool finds its home.
pub const HOME_ENV_VAR: &str = "DAISYHOME";

/// Base name of the terminal Daisy runs in. The shell kind is appended.
pub const TERMINAL_NAME: &str = "Daisy";

/// Overrides shell detection when set.
pub const SHELL_OVERRIDE_ENV_VAR: &str = "DAISY_SHELL";
