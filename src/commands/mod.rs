// src/commands/mod.rs
pub mod blank_cmd;
pub mod cat;
pub mod cd;
pub mod clear_cmd;
pub mod help_cmd;
pub mod ls;
pub mod pwd;
pub mod registry;
pub mod types;
pub mod whoami_cmd;

pub use registry::{create_portfolio_registry, CommandRegistry};
pub use types::{Command, CommandContext, CommandResult, HistoryEffect};
