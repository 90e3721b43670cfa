// src/commands/types.rs
use crate::fs::{FsNode, VirtualFs};
use crate::interpreter::errors::ShellError;
use crate::navigation::NavigationState;

/// How a command's output lands in the history buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryEffect {
    /// Output followed by a blank spacer line (when there is any output)
    Spaced,
    /// Output exactly as produced
    Verbatim,
    /// Empty the history, no echo line
    Clear,
}

/// Command execution result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub lines: Vec<String>,
    pub effect: HistoryEffect,
}

impl CommandResult {
    pub fn success(lines: Vec<String>) -> Self {
        Self { lines, effect: HistoryEffect::Spaced }
    }

    pub fn line(line: impl Into<String>) -> Self {
        Self::success(vec![line.into()])
    }

    /// No output at all
    pub fn silent() -> Self {
        Self::success(Vec::new())
    }

    /// A single blank line, no spacer
    pub fn blank() -> Self {
        Self { lines: vec![String::new()], effect: HistoryEffect::Verbatim }
    }

    pub fn clear() -> Self {
        Self { lines: Vec::new(), effect: HistoryEffect::Clear }
    }
}

impl From<ShellError> for CommandResult {
    fn from(err: ShellError) -> Self {
        CommandResult::line(err.to_string())
    }
}

/// Command execution context
pub struct CommandContext<'a> {
    /// Arguments after the command name
    pub args: Vec<String>,
    pub nav: &'a mut NavigationState,
    pub fs: &'a VirtualFs,
}

impl CommandContext<'_> {
    /// The directory node the session is in.
    pub fn cwd_node(&self) -> Result<&FsNode, ShellError> {
        Ok(self.fs.resolve_dir(self.nav.current())?)
    }
}

/// Command trait
pub trait Command: Send + Sync {
    fn name(&self) -> &'static str;
    fn execute(&self, ctx: CommandContext<'_>) -> Result<CommandResult, ShellError>;
}
