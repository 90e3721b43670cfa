// src/commands/cd/mod.rs
use crate::commands::{Command, CommandContext, CommandResult};
use crate::interpreter::errors::ShellError;

pub struct CdCommand;

impl Command for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }

    /// Supports:
    /// - cd, cd ~, cd home - go to the root
    /// - cd .. - parent directory, stays put at the root
    /// - cd - - swap with the previous directory
    /// - cd <dir> - enter a directory of the working directory
    fn execute(&self, ctx: CommandContext<'_>) -> Result<CommandResult, ShellError> {
        match ctx.args.first().map(String::as_str) {
            None | Some("~") | Some("home") => ctx.nav.go_home(),
            Some("..") => ctx.nav.go_up(),
            Some("-") => ctx.nav.go_back(),
            Some(target) => {
                let is_dir = ctx.cwd_node()?.entry(target).is_some_and(|node| node.is_directory());
                if !is_dir {
                    return Err(ShellError::NoSuchDirectory { name: target.to_string() });
                }
                ctx.nav.enter(target);
            }
        }
        Ok(CommandResult::silent())
    }
}
