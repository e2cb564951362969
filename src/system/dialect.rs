// src/system/dialect.rs

use std::fmt;

/// The command-shell dialect a terminal speaks.
///
/// Every quoting and prefix rule lives on this enum, so call sites never
/// branch on the raw shell path themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ShellKind {
    /// POSIX shells. Also the fallback for anything unrecognised.
    #[default]
    Bash,
    /// Windows PowerShell and `pwsh`.
    PowerShell,
    /// `cmd.exe`.
    Cmd,
}

impl ShellKind {
    /// Classifies a shell executable path. Total: anything unrecognised is Bash.
    pub fn classify(shell_path: &str) -> Self {
        let shell = shell_path.to_lowercase();
        if shell.contains("powershell") {
            Self::PowerShell
        } else if shell.contains("cmd.exe") {
            Self::Cmd
        } else {
            Self::Bash
        }
    }

    /// Short lowercase name, used to tell terminals of different shells apart.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bash => "bash",
            Self::PowerShell => "powershell",
            Self::Cmd => "cmd",
        }
    }

    /// Quotes `token` so the shell reads it back as exactly one literal argument.
    pub fn escape_argument(self, token: &str) -> String {
        match self {
            // 'it'\''s' -> close quote, literal quote, reopen quote
            Self::Bash => format!("'{}'", token.replace('\'', "'\\''")),
            Self::PowerShell => format!("'{}'", token.replace('\'', "''")),
            Self::Cmd => {
                let mut escaped = String::with_capacity(token.len() + 2);
                escaped.push('"');
                for c in token.chars() {
                    if c == '"' || c == '^' {
                        escaped.push('^');
                    }
                    escaped.push(c);
                }
                escaped.push('"');
                escaped
            }
        }
    }

    /// Escapes the path of the program being invoked.
    ///
    /// PowerShell treats a fully quoted path as a string expression rather than
    /// a command, so only the segments after the first (drive letter or empty
    /// root) are quoted and the whole is rejoined with `/`.
    pub fn escape_command_path(self, path: &str) -> String {
        match self {
            Self::Bash | Self::Cmd => self.escape_argument(path),
            Self::PowerShell => {
                let mut segments = path.split(['/', '\\']);
                let mut escaped = segments.next().unwrap_or_default().to_string();
                for segment in segments {
                    escaped.push('/');
                    escaped.push_str(&self.escape_argument(segment));
                }
                escaped
            }
        }
    }

    /// The text that sets `name` to `value` for the command that follows it.
    ///
    /// cmd.exe's `set` has no quoting for this form, so the value is inserted
    /// verbatim. Bash leaves values made only of shell-safe characters bare.
    pub fn env_prefix(self, name: &str, value: &str) -> String {
        match self {
            Self::Bash => format!("{}={} ", name, escape_bash_env_value(value)),
            Self::PowerShell => format!("$env:{} = {}; ", name, self.escape_argument(value)),
            Self::Cmd => format!("set {}={}&&", name, value),
        }
    }
}

impl fmt::Display for ShellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Free-function form of [`ShellKind::classify`].
pub fn classify(shell_path: &str) -> ShellKind {
    ShellKind::classify(shell_path)
}

fn is_bash_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '@' | '%' | '+' | '=' | ':' | ',' | '.' | '/' | '-')
}

fn escape_bash_env_value(value: &str) -> String {
    if !value.is_empty() && value.chars().all(is_bash_safe) {
        value.to_string()
    } else {
        ShellKind::Bash.escape_argument(value)
    }
}
