use crate::commands::{Command, CommandContext, CommandResult};
use crate::interpreter::errors::ShellError;

/// Handles a blank input line.
pub struct BlankCommand;

impl Command for BlankCommand {
    fn name(&self) -> &'static str {
        ""
    }

    fn execute(&self, _ctx: CommandContext<'_>) -> Result<CommandResult, ShellError> {
        Ok(CommandResult::blank())
    }
}
