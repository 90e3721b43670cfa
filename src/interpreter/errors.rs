//! Shell Errors
//!
//! User-facing failures of the interpreter. Each one is recovered by
//! printing its message as a single output line; none ends the session.

use thiserror::Error;

use crate::fs::FsError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShellError {
    #[error("{command}: command not found")]
    CommandNotFound { command: String },

    #[error("{command}: missing {what} argument")]
    MissingArgument { command: &'static str, what: &'static str },

    /// `cat` target is absent or a directory
    #[error("cat: {name}: No such file")]
    NoSuchFile { name: String },

    /// `cd` target is absent or a file
    #[error("cd: {name}: No such directory")]
    NoSuchDirectory { name: String },

    /// The working directory no longer resolves. Unreachable while
    /// navigation only ever enters existing directories.
    #[error("{0}")]
    Fs(#[from] FsError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            ShellError::CommandNotFound { command: "foo".into() }.to_string(),
            "foo: command not found"
        );
        assert_eq!(
            ShellError::MissingArgument { command: "cat", what: "file" }.to_string(),
            "cat: missing file argument"
        );
        assert_eq!(
            ShellError::NoSuchFile { name: "x.txt".into() }.to_string(),
            "cat: x.txt: No such file"
        );
        assert_eq!(
            ShellError::NoSuchDirectory { name: "nope".into() }.to_string(),
            "cd: nope: No such directory"
        );
    }
}
