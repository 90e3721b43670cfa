//! File System Module
//!
//! Provides the read-only virtual file system the terminal navigates:
//! - types: node tree and errors
//! - virtual_fs: path resolution and listing
//! - portfolio: the fixed portfolio tree

pub mod types;
pub mod virtual_fs;
pub mod portfolio;

pub use types::*;
pub use virtual_fs::VirtualFs;
