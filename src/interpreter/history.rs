//! History Buffer
//!
//! The lines currently on screen. The buffer is replaced by every command
//! rather than appended to, so it only ever shows the latest command.

use serde::Serialize;

use crate::commands::{CommandResult, HistoryEffect};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct History {
    lines: Vec<String>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_lines(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// History after a command: the echo line then the command's output.
    pub fn for_command(echo: String, result: CommandResult) -> Self {
        match result.effect {
            HistoryEffect::Clear => Self::new(),
            HistoryEffect::Verbatim => {
                let mut lines = Vec::with_capacity(result.lines.len() + 1);
                lines.push(echo);
                lines.extend(result.lines);
                Self { lines }
            }
            HistoryEffect::Spaced => {
                let spaced = !result.lines.is_empty();
                let mut lines = Vec::with_capacity(result.lines.len() + 2);
                lines.push(echo);
                lines.extend(result.lines);
                if spaced {
                    lines.push(String::new());
                }
                Self { lines }
            }
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
