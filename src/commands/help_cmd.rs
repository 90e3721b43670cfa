use crate::commands::{Command, CommandContext, CommandResult};
use crate::interpreter::errors::ShellError;

const HELP: &[&str] = &[
    "cat about-me.txt    - to learn more about me",
    "cd projects         - navigate to projects directory",
    "more-help           - terminal commands",
];

const MORE_HELP: &[&str] = &[
    "terminal commands:",
    "  ls                  - list files and directories",
    "  cat <file>          - display file contents",
    "  cd <dir>            - change directory (supports ~, home, .., -)",
    "  clear               - clear terminal",
    "  cat about-me.txt    - learn more about me",
];

fn lines(block: &[&str]) -> Vec<String> {
    block.iter().map(|line| line.to_string()).collect()
}

/// Short pointers to get started.
pub struct HelpCommand;

impl Command for HelpCommand {
    fn name(&self) -> &'static str {
        "help"
    }

    fn execute(&self, _ctx: CommandContext<'_>) -> Result<CommandResult, ShellError> {
        Ok(CommandResult::success(lines(HELP)))
    }
}

/// Full list of terminal commands.
pub struct MoreHelpCommand;

impl Command for MoreHelpCommand {
    fn name(&self) -> &'static str {
        "more-help"
    }

    fn execute(&self, _ctx: CommandContext<'_>) -> Result<CommandResult, ShellError> {
        Ok(CommandResult::success(lines(MORE_HELP)))
    }
}
