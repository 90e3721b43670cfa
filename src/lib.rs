//! portfolio-term - A portfolio explored from a simulated terminal
//!
//! This library provides a read-only virtual file system, a small command
//! interpreter over it, a timed boot sequence and a static info view,
//! plus a host that draws them on a real terminal.

pub mod boot;
pub mod commands;
pub mod fs;
pub mod info;
pub mod interpreter;
pub mod navigation;
pub mod render;
pub mod terminal;

pub use fs::{FsNode, VirtualFs};
pub use interpreter::{Execution, History, Interpreter, Session, ShellError};
pub use navigation::NavigationState;
pub use terminal::{Terminal, TerminalOptions};
