//! File System Types
//!
//! Core types for the read-only virtual file system.

use indexmap::IndexMap;
use thiserror::Error;

/// File system errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FsError {
    #[error("ENOENT: no such file or directory, '{path}'")]
    NotFound { path: String },

    #[error("ENOTDIR: not a directory, '{path}'")]
    NotDirectory { path: String },
}

/// Directory entries, kept in the order they were declared.
pub type Entries = IndexMap<String, FsNode>;

/// File system node.
///
/// Nodes are built once and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FsNode {
    File { content: String },
    Directory { entries: Entries },
}

impl FsNode {
    /// Create a text file node
    pub fn file(content: impl Into<String>) -> Self {
        FsNode::File { content: content.into() }
    }

    /// Create a directory node from `(name, node)` pairs
    pub fn dir<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, FsNode)>,
        S: Into<String>,
    {
        FsNode::Directory {
            entries: entries.into_iter().map(|(name, node)| (name.into(), node)).collect(),
        }
    }

    /// Check if node is a file
    pub fn is_file(&self) -> bool {
        matches!(self, FsNode::File { .. })
    }

    /// Check if node is a directory
    pub fn is_directory(&self) -> bool {
        matches!(self, FsNode::Directory { .. })
    }

    /// File content, `None` for directories
    pub fn content(&self) -> Option<&str> {
        match self {
            FsNode::File { content } => Some(content),
            FsNode::Directory { .. } => None,
        }
    }

    /// Directory entries, `None` for files
    pub fn entries(&self) -> Option<&Entries> {
        match self {
            FsNode::Directory { entries } => Some(entries),
            FsNode::File { .. } => None,
        }
    }

    /// Look up a direct child by name. Always `None` on files.
    pub fn entry(&self, name: &str) -> Option<&FsNode> {
        self.entries().and_then(|entries| entries.get(name))
    }
}

/// Join path segments into an absolute display path.
pub fn join_path<S: AsRef<str>>(segments: &[S]) -> String {
    if segments.is_empty() {
        return "/".to_string();
    }
    let mut path = String::new();
    for segment in segments {
        path.push('/');
        path.push_str(segment.as_ref());
    }
    path
}
