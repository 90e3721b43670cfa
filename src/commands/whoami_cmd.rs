use crate::commands::{Command, CommandContext, CommandResult};
use crate::interpreter::errors::ShellError;

pub const WHOAMI: &str = "kumasta! my name is jonah clemente, and i'm a computer science undergrad at uc berkeley, originally from los angeles. in my free time i play csgo, watch anime, and listen to music.";

pub struct WhoamiCommand;

impl Command for WhoamiCommand {
    fn name(&self) -> &'static str {
        "whoami"
    }

    fn execute(&self, _ctx: CommandContext<'_>) -> Result<CommandResult, ShellError> {
        Ok(CommandResult::line(WHOAMI))
    }
}
