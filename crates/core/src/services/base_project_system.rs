//! Base project system implementation
//!
//! Generic ProjectSystem over a file system and a host. Project kinds with
//! their own conventions wrap this instead of reimplementing it.

use crate::error::{require, Result};
use crate::interfaces::{FileSystem, HostProject, ProjectSystem};
use crate::types::PropertyValue;
use crate::utils::path;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct BaseProjectSystem<F, H> {
    file_system: F,
    host: H,
}

impl<F: FileSystem, H: HostProject> BaseProjectSystem<F, H> {
    pub fn new(file_system: F, host: H) -> Self {
        Self { file_system, host }
    }

    pub fn file_system(&self) -> &F {
        &self.file_system
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}

impl<F: FileSystem, H: HostProject> ProjectSystem for BaseProjectSystem<F, H> {
    fn root(&self) -> &Path {
        self.file_system.root()
    }

    fn full_path(&self) -> PathBuf {
        self.host.full_path()
    }

    fn project_name(&self) -> String {
        self.full_path()
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    fn resolve_path(&self, path: &str) -> Result<String> {
        require(path, "path")?;
        Ok(path::normalize(path))
    }

    fn file_exists(&self, path: &str) -> bool {
        self.file_system.file_exists(path)
    }

    fn add_file(&mut self, path: &str, contents: &[u8]) -> Result<()> {
        require(path, "path")?;
        self.file_system.add_file(path, contents)
    }

    fn delete_file(&mut self, path: &str) -> Result<()> {
        require(path, "path")?;
        self.file_system.delete_file(path)
    }

    fn list_directories(&self, path: &str) -> Result<Vec<String>> {
        self.file_system.directories(path)
    }

    fn add_reference(&mut self, reference_path: &str) -> Result<()> {
        require(reference_path, "reference_path")?;
        let full_path = path::absolute(self.file_system.root(), reference_path);
        self.host.add_reference(&full_path)
    }

    fn remove_reference(&mut self, name: &str) -> Result<()> {
        require(name, "name")?;
        self.host.remove_reference(name)
    }

    fn add_framework_reference(&mut self, name: &str) -> Result<()> {
        require(name, "name")?;
        self.host.add_framework_reference(name)
    }

    fn get_property(&self, name: &str) -> Result<Option<PropertyValue>> {
        require(name, "name")?;
        Ok(self.host.property(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::services::{PhysicalFileSystem, StandaloneHost};
    use tempfile::TempDir;

    fn project(temp_dir: &TempDir) -> BaseProjectSystem<PhysicalFileSystem, StandaloneHost> {
        BaseProjectSystem::new(
            PhysicalFileSystem::new(temp_dir.path()),
            StandaloneHost::new(temp_dir.path().join("Shop.csproj")).with_property("RootNamespace", "Shop"),
        )
    }

    #[test]
    fn test_resolve_path_only_normalizes() {
        let temp_dir = TempDir::new().unwrap();
        let project = project(&temp_dir);
        assert_eq!(project.resolve_path("./lib\\util.cs").unwrap(), "lib/util.cs");
        assert!(matches!(project.resolve_path(""), Err(Error::InvalidArgument("path"))));
    }

    #[test]
    fn test_project_name_is_file_stem() {
        let temp_dir = TempDir::new().unwrap();
        assert_eq!(project(&temp_dir).project_name(), "Shop");
    }

    #[test]
    fn test_references_go_through_host() {
        let temp_dir = TempDir::new().unwrap();
        let mut project = project(&temp_dir);

        project.add_reference("lib/Foo.dll").unwrap();
        assert_eq!(project.host().references(), [temp_dir.path().join("lib").join("Foo.dll")]);

        project.remove_reference("Foo").unwrap();
        assert!(project.host().references().is_empty());
        assert!(matches!(project.remove_reference(""), Err(Error::InvalidArgument("name"))));
    }

    #[test]
    fn test_property_delegates() {
        let temp_dir = TempDir::new().unwrap();
        let project = project(&temp_dir);
        assert_eq!(
            project.get_property("RootNamespace").unwrap(),
            Some(PropertyValue::from("Shop"))
        );
        assert_eq!(project.get_property("Other").unwrap(), None);
        assert!(!project.exclude_file("web.config"));
    }
}
