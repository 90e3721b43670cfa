// src/commands/pwd/mod.rs
use crate::commands::{Command, CommandContext, CommandResult};
use crate::interpreter::errors::ShellError;

pub struct PwdCommand;

impl Command for PwdCommand {
    fn name(&self) -> &'static str {
        "pwd"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> Result<CommandResult, ShellError> {
        Ok(CommandResult::line(ctx.nav.pwd()))
    }
}
