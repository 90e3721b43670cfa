// src/commands/registry.rs
use std::collections::HashMap;
use super::types::Command;

pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn Command>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    pub fn register(&mut self, cmd: Box<dyn Command>) {
        self.commands.insert(cmd.name().to_string(), cmd);
    }

    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(name).map(|c| c.as_ref())
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.commands.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

use super::blank_cmd::BlankCommand;
use super::cat::CatCommand;
use super::cd::CdCommand;
use super::clear_cmd::ClearCommand;
use super::help_cmd::{HelpCommand, MoreHelpCommand};
use super::ls::LsCommand;
use super::pwd::PwdCommand;
use super::whoami_cmd::WhoamiCommand;

/// Register every portfolio terminal command
pub fn register_portfolio(registry: &mut CommandRegistry) {
    registry.register(Box::new(HelpCommand));
    registry.register(Box::new(MoreHelpCommand));
    registry.register(Box::new(LsCommand));
    registry.register(Box::new(CatCommand));
    registry.register(Box::new(CdCommand));
    registry.register(Box::new(PwdCommand));
    registry.register(Box::new(ClearCommand));
    registry.register(Box::new(WhoamiCommand));
    registry.register(Box::new(BlankCommand));
}

/// Create a registry holding the portfolio terminal commands
pub fn create_portfolio_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    register_portfolio(&mut registry);
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_portfolio_registry_names() {
        let registry = create_portfolio_registry();
        assert_eq!(
            registry.names(),
            vec!["", "cat", "cd", "clear", "help", "ls", "more-help", "pwd", "whoami"]
        );
    }

    #[test]
    fn test_lookup_is_exact() {
        let registry = create_portfolio_registry();
        assert!(registry.contains("ls"));
        assert!(!registry.contains("LS"));
        assert!(registry.get("echo").is_none());
        assert_eq!(registry.get("cat").map(|c| c.name()), Some("cat"));
    }
}
