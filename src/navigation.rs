//! Navigation State
//!
//! Current and previous working directories as path segments. Only `cd`
//! changes them; every transition records the pre-command directory so
//! `cd -` can toggle back.

use log::debug;

use crate::fs::join_path;

/// Prompt prefix shown before the working directory.
pub const PROMPT_USER: &str = "jon4h@portfolio:~";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationState {
    current: Vec<String>,
    previous: Vec<String>,
}

impl NavigationState {
    /// Both paths at the root.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start at `current`, with `previous` at the root.
    ///
    /// Callers must pass a path that resolves to a directory.
    pub fn at<S: Into<String>>(current: impl IntoIterator<Item = S>) -> Self {
        Self {
            current: current.into_iter().map(Into::into).collect(),
            previous: Vec::new(),
        }
    }

    pub fn current(&self) -> &[String] {
        &self.current
    }

    pub fn previous(&self) -> &[String] {
        &self.previous
    }

    pub fn is_root(&self) -> bool {
        self.current.is_empty()
    }

    /// `cd`, `cd ~`, `cd home`
    pub fn go_home(&mut self) {
        self.previous = std::mem::take(&mut self.current);
        debug!("cd: home (previous {})", join_path(&self.previous));
    }

    /// `cd ..`; stays at the root when already there.
    pub fn go_up(&mut self) {
        self.previous = self.current.clone();
        self.current.pop();
        debug!("cd: up to {}", self.pwd());
    }

    /// `cd -`
    pub fn go_back(&mut self) {
        std::mem::swap(&mut self.current, &mut self.previous);
        debug!("cd: back to {}", self.pwd());
    }

    /// `cd <name>`; the caller has checked that `name` is a directory.
    pub fn enter(&mut self, name: &str) {
        self.previous = self.current.clone();
        self.current.push(name.to_string());
        debug!("cd: enter {}", self.pwd());
    }

    /// Absolute working directory, `/` at the root.
    pub fn pwd(&self) -> String {
        join_path(&self.current)
    }

    /// Prompt for the current directory, e.g. `jon4h@portfolio:~/projects$`.
    pub fn prompt(&self) -> String {
        format!("{}{}$", PROMPT_USER, self.title_suffix())
    }

    /// Window title, e.g. `jon4h@portfolio:~/projects`.
    pub fn title(&self) -> String {
        format!("{}{}", PROMPT_USER, self.title_suffix())
    }

    fn title_suffix(&self) -> String {
        if self.is_root() {
            String::new()
        } else {
            join_path(&self.current)
        }
    }
}
