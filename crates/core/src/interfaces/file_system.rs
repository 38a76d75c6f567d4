//! File system interface
//!
//! All paths are relative to the project root.

use crate::error::Result;
use std::path::{Path, PathBuf};

/// File operations scoped to a project root
pub trait FileSystem {
    /// Absolute directory every relative path is anchored to
    fn root(&self) -> &Path;

    /// Absolute location of a project-relative path
    fn full_path(&self, path: &str) -> PathBuf;

    fn file_exists(&self, path: &str) -> bool;

    /// Delete a file; deleting a missing file succeeds
    fn delete_file(&mut self, path: &str) -> Result<()>;

    /// Create or overwrite a file, creating parent folders as needed
    fn add_file(&mut self, path: &str, contents: &[u8]) -> Result<()>;

    /// Names of the immediate subdirectories of `path`
    fn directories(&self, path: &str) -> Result<Vec<String>>;
}
