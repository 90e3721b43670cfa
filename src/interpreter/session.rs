//! Session
//!
//! Owned state of one terminal session: the navigation state and the
//! history buffer, threaded through the interpreter on every submit.

use serde::Serialize;

use crate::navigation::NavigationState;

use super::history::History;
use super::interpreter::{Execution, Interpreter};

/// Serializable view of a session for `--json` output
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub history: History,
    pub cwd: String,
}

pub struct Session<'fs> {
    interpreter: Interpreter<'fs>,
    nav: NavigationState,
    history: History,
}

impl Session<'static> {
    pub fn portfolio() -> Self {
        Self::new(Interpreter::portfolio())
    }
}

impl<'fs> Session<'fs> {
    /// New session at the root with an empty history.
    pub fn new(interpreter: Interpreter<'fs>) -> Self {
        Self {
            interpreter,
            nav: NavigationState::new(),
            history: History::new(),
        }
    }

    /// Replace the history, e.g. with the boot lines.
    pub fn seed(&mut self, history: History) {
        self.history = history;
    }

    /// Run one input line and return the history it produced.
    pub fn submit(&mut self, line: &str) -> &History {
        let nav = std::mem::take(&mut self.nav);
        let Execution { state, history } = self.interpreter.execute(nav, line);
        self.nav = state;
        self.history = history;
        &self.history
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn nav(&self) -> &NavigationState {
        &self.nav
    }

    pub fn prompt(&self) -> String {
        self.nav.prompt()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            history: self.history.clone(),
            cwd: self.nav.pwd(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_replaces_history() {
        let mut session = Session::portfolio();
        session.seed(History::from_lines(vec!["boot".into()]));
        session.submit("ls");
        assert_eq!(session.history().lines()[0], "jon4h@portfolio:~$ ls");
        session.submit("pwd");
        assert_eq!(session.history().lines(), ["jon4h@portfolio:~$ pwd", "/", ""]);
    }

    #[test]
    fn test_clear_after_output() {
        let mut session = Session::portfolio();
        session.submit("help");
        assert!(!session.history().is_empty());
        session.submit("clear");
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_navigation_persists_between_submits() {
        let mut session = Session::portfolio();
        session.submit("cd projects");
        assert_eq!(session.prompt(), "jon4h@portfolio:~/projects$");
        session.submit("cat spot.md");
        assert!(session.history().lines()[1].starts_with("# spot |"));
        session.submit("cd");
        assert!(session.nav().is_root());
        assert_eq!(session.nav().previous(), ["projects"]);
    }

    #[test]
    fn test_snapshot_json() {
        let mut session = Session::portfolio();
        session.submit("cd projects");
        session.submit("pwd");
        let json = serde_json::to_value(session.snapshot()).unwrap();
        assert_eq!(json["cwd"], "/projects");
        assert_eq!(json["history"][1], "/projects");
    }
}
