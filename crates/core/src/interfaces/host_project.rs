//! Host project interface
//!
//! The object model of the environment that owns the project (an IDE, or a
//! standalone stand-in). Only the capabilities the adapter falls back on are
//! exposed here.

use crate::error::Result;
use crate::types::PropertyValue;
use std::path::{Path, PathBuf};

pub trait HostProject {
    /// Full path of the project as the host reports it
    fn full_path(&self) -> PathBuf;

    /// Host-reported value of a project property
    fn property(&self, name: &str) -> Option<PropertyValue>;

    /// Record a reference to the assembly at `path` through the host
    fn add_reference(&mut self, path: &Path) -> Result<()>;

    /// Add a reference to an assembly the runtime provides globally
    fn add_framework_reference(&mut self, name: &str) -> Result<()>;

    /// Remove a reference the host itself tracks
    fn remove_reference(&mut self, name: &str) -> Result<()>;
}
