//! Boot Script
//!
//! The fixed lines of the intro animation and the delays between them.

use std::time::Duration;

/// Delay between revealed lines.
pub const DEFAULT_TICK: Duration = Duration::from_millis(800);

/// Pause after the last line before the terminal becomes interactive.
pub const DEFAULT_SETTLE: Duration = Duration::from_millis(1000);

const PORTFOLIO_LINES: &[&str] = &[
    "Welcome to my personal website 🎉!",
    "",
    "$ whoami",
    "jon4h@portfolio:~$ computer science undergrad @ uc berkeley",
    "",
    "loading projects and experiences...",
    "",
    "terminal ready 🚀! type 'help' for available commands or click the '?' for a simple view.",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootScript {
    pub lines: Vec<String>,
    pub tick: Duration,
    pub settle: Duration,
}

impl BootScript {
    pub fn new<S: Into<String>>(lines: impl IntoIterator<Item = S>) -> Self {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            tick: DEFAULT_TICK,
            settle: DEFAULT_SETTLE,
        }
    }

    /// The portfolio intro.
    pub fn portfolio() -> Self {
        Self::new(PORTFOLIO_LINES.iter().copied())
    }

    pub fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }

    pub fn with_settle(mut self, settle: Duration) -> Self {
        self.settle = settle;
        self
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Default for BootScript {
    fn default() -> Self {
        Self::portfolio()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_portfolio_script() {
        let script = BootScript::portfolio();
        assert_eq!(script.len(), 8);
        assert_eq!(script.tick, Duration::from_millis(800));
        assert_eq!(script.settle, Duration::from_millis(1000));
        assert_eq!(script.lines[2], "$ whoami");
        assert!(script.lines.last().unwrap().starts_with("terminal ready"));
    }

    #[test]
    fn test_builders() {
        let script = BootScript::new(["a"])
            .with_tick(Duration::from_millis(5))
            .with_settle(Duration::ZERO);
        assert_eq!(script.lines, vec!["a"]);
        assert_eq!(script.tick, Duration::from_millis(5));
        assert_eq!(script.settle, Duration::ZERO);
    }
}
