// src/system/command_line.rs

use super::dialect::ShellKind;

/// Everything needed to render one environment-prefixed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    /// The program to run.
    pub command: String,
    /// Directory the terminal should change into first. Not part of the line
    /// produced by [`build`]; see [`build_change_directory`].
    pub working_directory: Option<String>,
    /// Arguments, each escaped as one token.
    pub arguments: Vec<String>,
    /// Variable set for the command only.
    pub env_var_name: String,
    /// Raw value of `env_var_name`; escaping is up to the dialect.
    pub env_var_value: String,
}

/// Renders `spec` as a single line for `kind`: env prefix, escaped program
/// path, then every argument escaped and joined by single spaces.
///
/// Pure and total. Unusual input is escaped literally, never rejected.
pub fn build(spec: &CommandSpec, kind: ShellKind) -> String {
    let prefix = kind.env_prefix(&spec.env_var_name, &spec.env_var_value);
    let command = kind.escape_command_path(&spec.command);
    let arguments = spec
        .arguments
        .iter()
        .map(|arg| kind.escape_argument(arg))
        .collect::<Vec<_>>()
        .join(" ");

    format!("{}{} {}", prefix, command, arguments)
}

/// The line that moves the terminal into `path`. Existence is the caller's concern.
pub fn build_change_directory(path: &str, kind: ShellKind) -> String {
    format!("cd {}", kind.escape_argument(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tool_spec() -> CommandSpec {
        CommandSpec {
            command: "/usr/bin/tool".to_string(),
            working_directory: None,
            arguments: vec!["a b".to_string(), "c'd".to_string()],
            env_var_name: "HOME".to_string(),
            env_var_value: "/x/y".to_string(),
        }
    }

    #[test]
    fn test_build_bash() {
        assert_eq!(
            build(&tool_spec(), ShellKind::Bash),
            "HOME=/x/y '/usr/bin/tool' 'a b' 'c'\\''d'"
        );
    }

    #[test]
    fn test_build_cmd() {
        assert_eq!(
            build(&tool_spec(), ShellKind::Cmd),
            "set HOME=/x/y&&\"/usr/bin/tool\" \"a b\" \"c'd\""
        );
    }

    #[test]
    fn test_build_powershell() {
        assert_eq!(
            build(&tool_spec(), ShellKind::PowerShell),
            "$env:HOME = '/x/y'; /'usr'/'bin'/'tool' 'a b' 'c''d'"
        );
    }

    #[test]
    fn test_build_windows_paths_for_powershell() {
        let spec = CommandSpec {
            command: "C:\\Program Files\\Daisy\\daisy.exe".to_string(),
            working_directory: Some("C:\\Daisy Home".to_string()),
            arguments: vec!["C:\\work\\model's.dai".to_string()],
            env_var_name: "DAISYHOME".to_string(),
            env_var_value: "C:\\Daisy Home".to_string(),
        };

        assert_eq!(
            build(&spec, ShellKind::PowerShell),
            "$env:DAISYHOME = 'C:\\Daisy Home'; C:/'Program Files'/'Daisy'/'daisy.exe' 'C:\\work\\model''s.dai'"
        );
    }

    #[test]
    fn test_build_quotes_env_value_needing_it_in_bash() {
        let spec = CommandSpec {
            env_var_value: "/home/me/Daisy Home".to_string(),
            ..tool_spec()
        };
        assert_eq!(
            build(&spec, ShellKind::Bash),
            "HOME='/home/me/Daisy Home' '/usr/bin/tool' 'a b' 'c'\\''d'"
        );
    }

    #[test]
    fn test_build_ignores_working_directory() {
        let with_dir = CommandSpec {
            working_directory: Some("/somewhere".to_string()),
            ..tool_spec()
        };
        assert_eq!(
            build(&with_dir, ShellKind::Bash),
            build(&tool_spec(), ShellKind::Bash)
        );
    }

    #[test]
    fn test_build_change_directory() {
        assert_eq!(
            build_change_directory("/opt/daisy home", ShellKind::Bash),
            "cd '/opt/daisy home'"
        );
        assert_eq!(
            build_change_directory("C:\\Daisy's", ShellKind::PowerShell),
            "cd 'C:\\Daisy''s'"
        );
        assert_eq!(
            build_change_directory("C:\\Daisy", ShellKind::Cmd),
            "cd \"C:\\Daisy\""
        );
    }

    #[test]
    fn test_build_bash_line_splits_into_expected_words() {
        let line = build(&tool_spec(), ShellKind::Bash);
        let words = shlex::split(&line).unwrap_or_default();
        assert_eq!(words, vec!["HOME=/x/y", "/usr/bin/tool", "a b", "c'd"]);
    }
}
