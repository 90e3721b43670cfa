//! Command Interpreter
//!
//! Turns one input line into a new navigation state and a new history
//! buffer. Holds no session state of its own: the caller passes the
//! navigation state in and gets the updated one back.

use log::debug;

use crate::commands::{create_portfolio_registry, CommandContext, CommandRegistry, CommandResult};
use crate::fs::VirtualFs;
use crate::navigation::NavigationState;

use super::errors::ShellError;
use super::history::History;

/// Result of running one input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Execution {
    pub state: NavigationState,
    pub history: History,
}

pub struct Interpreter<'fs> {
    registry: CommandRegistry,
    fs: &'fs VirtualFs,
}

impl Interpreter<'static> {
    /// Portfolio commands over the portfolio tree.
    pub fn portfolio() -> Self {
        Self::new(create_portfolio_registry(), VirtualFs::portfolio())
    }
}

impl<'fs> Interpreter<'fs> {
    pub fn new(registry: CommandRegistry, fs: &'fs VirtualFs) -> Self {
        Self { registry, fs }
    }

    pub fn fs(&self) -> &'fs VirtualFs {
        self.fs
    }

    /// Run `line` against `state`.
    pub fn execute(&self, mut state: NavigationState, line: &str) -> Execution {
        let echo = format!("{} {}", state.prompt(), line);
        let (command, args) = parse_line(line);
        debug!("dispatch: {:?} with {} arg(s)", command, args.len());

        let result = match self.registry.get(&command) {
            Some(cmd) => {
                let ctx = CommandContext { args, nav: &mut state, fs: self.fs };
                cmd.execute(ctx).unwrap_or_else(CommandResult::from)
            }
            None => CommandResult::from(ShellError::CommandNotFound { command }),
        };

        Execution {
            state,
            history: History::for_command(echo, result),
        }
    }
}

/// Split a line on whitespace; the command name is lowercased, empty for a
/// blank line.
pub fn parse_line(line: &str) -> (String, Vec<String>) {
    let mut words = line.split_whitespace();
    let command = words.next().map(str::to_lowercase).unwrap_or_default();
    (command, words.map(String::from).collect())
}

/// Split a `-c` script into command lines on `;` and newlines. Lines are
/// kept as typed; only the empty piece after a trailing separator is dropped.
pub fn split_script(script: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = script.split(|c: char| c == ';' || c == '\n').collect();
    if lines.last() == Some(&"") {
        lines.pop();
    }
    lines
}

// ============================================================================
// Tests
// ============================================================================
