// src/commands/ls/mod.rs
use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::VirtualFs;
use crate::interpreter::errors::ShellError;

pub struct LsCommand;

impl Command for LsCommand {
    fn name(&self) -> &'static str {
        "ls"
    }

    /// Lists the working directory only; arguments are ignored.
    fn execute(&self, ctx: CommandContext<'_>) -> Result<CommandResult, ShellError> {
        let names = VirtualFs::list(ctx.cwd_node()?)?;
        Ok(CommandResult::line(names.join("  ")))
    }
}
