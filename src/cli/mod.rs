use clap::Parser;

/// Per-command argument parsers.
pub mod args;
/// Routes raw arguments to a handler.
pub mod dispatcher;
/// One handler per command.
pub mod handlers;

/// Builds the color-aware help text at runtime.
fn build_help_string() -> &'static str {
    // Replaces the semantic tags of the help template with ANSI styles.
    let use_colors = colored::control::SHOULD_COLORIZE.should_colorize();

    let template = t!("cli.help.template");

    let title = if use_colors { "\x1b[1;33m" } else { "" }; // Bold Yellow
    let hl = if use_colors { "\x1b[1;36m" } else { "" }; // Bold Cyan
    let cmd = if use_colors { "\x1b[36m" } else { "" }; // Cyan
    let dim = if use_colors { "\x1b[2m" } else { "" };
    let reset = if use_colors { "\x1b[0m" } else { "" };

    let formatted_string = template
        .replace("<title>", title)
        .replace("</title>", reset)
        .replace("<hl>", hl)
        .replace("</hl>", reset)
        .replace("<cmd>", cmd)
        .replace("</cmd>", reset)
        .replace("<dim>", dim)
        .replace("</dim>", reset);

    Box::leak(formatted_string.into_boxed_str())
}

/// daisy: runs the Daisy tool on a file with the right environment for your shell.
#[derive(Parser, Debug)]
#[command(
    name = "daisy",
    version,
    about,
    help_template = { build_help_string() },
)]
#[command(disable_help_subcommand = true)]
#[command(trailing_var_arg = true)]
pub struct Cli {
    /// Everything after `daisy`. Routed by the dispatcher.
    #[arg(allow_hyphen_values = true)]
    pub args: Vec<String>,
}
