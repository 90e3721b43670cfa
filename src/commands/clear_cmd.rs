use crate::commands::{Command, CommandContext, CommandResult};
use crate::interpreter::errors::ShellError;

pub struct ClearCommand;

impl Command for ClearCommand {
    fn name(&self) -> &'static str {
        "clear"
    }

    fn execute(&self, _ctx: CommandContext<'_>) -> Result<CommandResult, ShellError> {
        Ok(CommandResult::clear())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::types::test_support::run;
    use crate::commands::HistoryEffect;
    use crate::navigation::NavigationState;

    #[test]
    fn test_clear_empties_history() {
        let mut nav = NavigationState::new();
        let result = run(&ClearCommand, &[], &mut nav).unwrap();
        assert_eq!(result.effect, HistoryEffect::Clear);
        assert!(result.lines.is_empty());
    }
}
