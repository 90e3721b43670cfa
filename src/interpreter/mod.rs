//! Interpreter module
//!
//! Line parsing, command dispatch and the per-session state it threads.

pub mod errors;
pub mod history;
pub mod interpreter;
pub mod session;

pub use errors::ShellError;
pub use history::History;
pub use interpreter::{parse_line, split_script, Execution, Interpreter};
pub use session::{Session, Snapshot};
