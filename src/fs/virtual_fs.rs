//! Read-Only Virtual File System
//!
//! A fixed tree of text files and directories, walked one path segment at
//! a time from the root.

use super::types::*;

/// Read-only virtual file system rooted at a single directory node.
#[derive(Debug, Clone)]
pub struct VirtualFs {
    root: FsNode,
}

impl VirtualFs {
    /// Create a file system from a root node.
    ///
    /// A file root is replaced by an empty directory; the root is always a
    /// directory.
    pub fn new(root: FsNode) -> Self {
        let root = match root {
            FsNode::File { .. } => FsNode::Directory { entries: Entries::new() },
            dir => dir,
        };
        Self { root }
    }

    /// The root directory node.
    pub fn root(&self) -> &FsNode {
        &self.root
    }

    /// Walk `path` from the root.
    ///
    /// Every intermediate node must be a directory holding the next segment.
    pub fn resolve<S: AsRef<str>>(&self, path: &[S]) -> Result<&FsNode, FsError> {
        let mut current = &self.root;
        for (depth, segment) in path.iter().enumerate() {
            current = current.entry(segment.as_ref()).ok_or_else(|| FsError::NotFound {
                path: join_path(&path[..=depth]),
            })?;
        }
        Ok(current)
    }

    /// Resolve `path` and require it to be a directory.
    pub fn resolve_dir<S: AsRef<str>>(&self, path: &[S]) -> Result<&FsNode, FsError> {
        let node = self.resolve(path)?;
        if node.is_directory() {
            Ok(node)
        } else {
            Err(FsError::NotDirectory { path: join_path(path) })
        }
    }

    /// Entry names of a directory node, directories suffixed with `/`.
    pub fn list(node: &FsNode) -> Result<Vec<String>, FsError> {
        let entries = node.entries().ok_or_else(|| FsError::NotDirectory {
            path: String::new(),
        })?;
        Ok(entries
            .iter()
            .map(|(name, child)| {
                if child.is_directory() {
                    format!("{}/", name)
                } else {
                    name.clone()
                }
            })
            .collect())
    }

    /// All directory paths reachable from the root, root first.
    pub fn directories(&self) -> Vec<Vec<String>> {
        let mut found = Vec::new();
        collect_directories(&self.root, &mut Vec::new(), &mut found);
        found
    }
}

fn collect_directories(node: &FsNode, prefix: &mut Vec<String>, found: &mut Vec<Vec<String>>) {
    let Some(entries) = node.entries() else {
        return;
    };
    found.push(prefix.clone());
    for (name, child) in entries {
        if child.is_directory() {
            prefix.push(name.clone());
            collect_directories(child, prefix, found);
            prefix.pop();
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
