// src/commands/cat/mod.rs
use crate::commands::{Command, CommandContext, CommandResult};
use crate::interpreter::errors::ShellError;

pub struct CatCommand;

impl Command for CatCommand {
    fn name(&self) -> &'static str {
        "cat"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> Result<CommandResult, ShellError> {
        let Some(filename) = ctx.args.first() else {
            return Err(ShellError::MissingArgument { command: "cat", what: "file" });
        };

        // Directories and missing names share one message.
        match ctx.cwd_node()?.entry(filename).and_then(|node| node.content()) {
            Some(content) => Ok(CommandResult::line(content)),
            None => Err(ShellError::NoSuchFile { name: filename.clone() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::types::test_support::run;
    use crate::fs::portfolio::{ABOUT_ME, PINTOS};
    use crate::navigation::NavigationState;

    #[test]
    fn test_cat_about_me_from_root() {
        let mut nav = NavigationState::new();
        let result = run(&CatCommand, &["about-me.txt"], &mut nav).unwrap();
        assert_eq!(result.lines, vec![ABOUT_ME.to_string()]);
    }

    #[test]
    fn test_cat_about_me_from_projects() {
        let mut nav = NavigationState::at(["projects"]);
        let err = run(&CatCommand, &["about-me.txt"], &mut nav).unwrap_err();
        assert_eq!(err.to_string(), "cat: about-me.txt: No such file");
    }

    #[test]
    fn test_cat_project_file() {
        let mut nav = NavigationState::at(["projects"]);
        let result = run(&CatCommand, &["pintos.md"], &mut nav).unwrap();
        assert_eq!(result.lines, vec![PINTOS.to_string()]);
    }

    #[test]
    fn test_cat_directory_is_no_such_file() {
        let mut nav = NavigationState::new();
        let err = run(&CatCommand, &["projects"], &mut nav).unwrap_err();
        assert_eq!(err, ShellError::NoSuchFile { name: "projects".into() });
    }

    #[test]
    fn test_cat_missing_argument() {
        let mut nav = NavigationState::at(["projects"]);
        let before = nav.clone();
        let err = run(&CatCommand, &[], &mut nav).unwrap_err();
        assert_eq!(err.to_string(), "cat: missing file argument");
        assert_eq!(nav, before);
    }

    #[test]
    fn test_cat_ignores_extra_args() {
        let mut nav = NavigationState::new();
        let result = run(&CatCommand, &["about-me.txt", "extra"], &mut nav).unwrap();
        assert_eq!(result.lines, vec![ABOUT_ME.to_string()]);
    }
}
