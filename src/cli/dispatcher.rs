use anyhow::Result;

use crate::cli::handlers;

/// A command, its aliases, and its handler.
struct CommandDefinition {
    name: &'static str,
    aliases: &'static [&'static str],
    handler: fn(Vec<String>) -> Result<()>,
}

/// The single source of truth for all commands.
static COMMAND_REGISTRY: &[CommandDefinition] = &[
    CommandDefinition {
        name: "run",
        aliases: &[],
        handler: handlers::run::handle,
    },
    CommandDefinition {
        name: "command",
        aliases: &["print"],
        handler: handlers::command::handle,
    },
    CommandDefinition {
        name: "executables",
        aliases: &["ls"],
        handler: handlers::executables::handle,
    },
];

/// Finds a command definition in the registry by its name or alias.
fn find_command(name: &str) -> Option<&'static CommandDefinition> {
    COMMAND_REGISTRY
        .iter()
        .find(|cmd| cmd.name == name || cmd.aliases.contains(&name))
}

/// Routes the raw arguments to a handler.
///
/// `daisy <command> [args...]` goes to that command. Anything else is a
/// shortcut for `daisy run [args...]`, so `daisy model.dai` runs the file.
pub fn dispatch(all_args: Vec<String>) -> Result<()> {
    log::debug!("Dispatching args: {:?}", all_args);

    let Some((first, rest)) = all_args.split_first() else {
        println!("{}", t!("cli.info.usage_hint"));
        return Ok(());
    };

    match find_command(first) {
        Some(command) => (command.handler)(rest.to_vec()),
        None => handlers::run::handle(all_args),
    }
}
