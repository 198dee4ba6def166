use crate::cli::output;
use crate::cli::shell_context::ShellContext;

use super::{CommandDefinition, CommandResult};

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new(
            "theme",
            "Toggle between the light and dark palettes",
            "theme",
            cmd_theme,
        ),
        CommandDefinition::new("help", "List available commands", "help", cmd_help),
        CommandDefinition::new("quit", "Exit the shell", "quit", cmd_quit),
        CommandDefinition::new("exit", "Exit the shell", "exit", cmd_quit),
    ]
}

fn cmd_theme(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let theme = context.toggle_theme()?;
    output::success(format!("Theme switched to {}.", theme.flag()));
    Ok(())
}

fn cmd_help(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::section("Commands");
    let entries: Vec<(&str, &str)> = context
        .registry
        .iter()
        .map(|definition| (definition.usage, definition.description))
        .collect();
    output::print_two_column(&entries);
    Ok(())
}

fn cmd_quit(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.running = false;
    Ok(())
}
