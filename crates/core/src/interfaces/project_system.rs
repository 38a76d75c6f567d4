//! Project system interface
//!
//! The operations a package-installation engine performs against a project.

use crate::error::Result;
use crate::types::PropertyValue;
use std::path::{Path, PathBuf};

/// Trait for project-level file, reference and property operations
pub trait ProjectSystem {
    /// Project root directory
    fn root(&self) -> &Path;

    /// Full path of the project as its host reports it
    fn full_path(&self) -> PathBuf;

    /// Display name used in diagnostics
    fn project_name(&self) -> String;

    /// Final project-relative location for a file the engine wants to add
    fn resolve_path(&self, path: &str) -> Result<String>;

    fn file_exists(&self, path: &str) -> bool;

    fn add_file(&mut self, path: &str, contents: &[u8]) -> Result<()>;

    fn delete_file(&mut self, path: &str) -> Result<()>;

    /// Immediate subdirectories of `path` as the engine should see them
    fn list_directories(&self, path: &str) -> Result<Vec<String>>;

    /// Reference the assembly at `reference_path` (absolute or root-relative)
    fn add_reference(&mut self, reference_path: &str) -> Result<()>;

    fn remove_reference(&mut self, name: &str) -> Result<()>;

    /// Reference an assembly the runtime provides globally
    fn add_framework_reference(&mut self, name: &str) -> Result<()>;

    fn get_property(&self, name: &str) -> Result<Option<PropertyValue>>;

    /// Whether a package file should be skipped for this project
    fn exclude_file(&self, _path: &str) -> bool {
        false
    }
}
