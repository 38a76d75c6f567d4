//! Website project system
//!
//! Wraps a generic [`ProjectSystem`] with the conventions of projects that
//! compile loose source files from a reserved folder:
//!
//! - source files are relocated into the compile folder unless the open batch
//!   exempts them,
//! - references are emulated with marker files,
//! - the host-generated folder is hidden from directory listings,
//! - the root namespace property reports the fixed implicit namespace.

use std::ops::{Deref, DerefMut};
use std::path::{Path, PathBuf};

use crate::batch::ExclusionTracker;
use crate::classify::PathClassifier;
use crate::config::AdapterConfig;
use crate::error::{require, Result};
use crate::interfaces::{BatchProcessor, ProjectSystem};
use crate::placement::{Placement, PlacementResolver};
use crate::reference::{ReferenceMarkers, RemovalOutcome};
use crate::types::{PackageAction, PropertyValue};
use crate::utils::path;

#[derive(Debug)]
pub struct WebSiteProjectSystem<P> {
    inner: P,
    classifier: PathClassifier,
    exclusions: ExclusionTracker,
    markers: ReferenceMarkers,
    root_namespace_property: String,
    root_namespace: String,
}

impl<P: ProjectSystem> WebSiteProjectSystem<P> {
    pub fn new(inner: P) -> Self {
        Self::with_config(inner, &AdapterConfig::default())
    }

    pub fn with_config(inner: P, config: &AdapterConfig) -> Self {
        Self {
            inner,
            classifier: PathClassifier::new(config),
            exclusions: ExclusionTracker::new(),
            markers: ReferenceMarkers::new(config),
            root_namespace_property: config.root_namespace_property.clone(),
            root_namespace: config.root_namespace.clone(),
        }
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut P {
        &mut self.inner
    }

    pub fn into_inner(self) -> P {
        self.inner
    }

    pub fn classifier(&self) -> &PathClassifier {
        &self.classifier
    }

    pub fn markers(&self) -> &ReferenceMarkers {
        &self.markers
    }

    /// Opens a batch that ends when the returned guard is dropped.
    ///
    /// The guard derefs to the project, so placements are resolved through it
    /// while the batch is open.
    pub fn batch<S: AsRef<str>>(&mut self, paths: &[S], action: PackageAction) -> Batch<'_, P> {
        self.begin_processing(paths, action);
        Batch { project: self }
    }

    /// Where `path` goes and why. Classification sees the normalized path,
    /// so `./App_Code/x.cs` and `/App_Code/x.cs` count as inside the compile
    /// folder.
    pub fn place(&self, path: &str) -> Result<Placement> {
        require(path, "path")?;
        let normalized = path::normalize(path);
        let mut placement =
            PlacementResolver::new(&self.classifier, &self.exclusions).place(&normalized);
        placement.path = self.inner.resolve_path(&placement.path)?;
        tracing::debug!("Placing {} at {} ({})", path, placement.path, placement.kind);
        Ok(placement)
    }

    /// Removes a reference and reports how it was removed.
    pub fn remove_reference_with_outcome(&mut self, name: &str) -> Result<RemovalOutcome> {
        self.markers.remove(&mut self.inner, name)
    }
}

impl<P: ProjectSystem> ProjectSystem for WebSiteProjectSystem<P> {
    fn root(&self) -> &Path {
        self.inner.root()
    }

    fn full_path(&self) -> PathBuf {
        self.inner.full_path()
    }

    /// Website projects are folders, so the whole final component is the name.
    fn project_name(&self) -> String {
        self.full_path()
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    fn resolve_path(&self, path: &str) -> Result<String> {
        self.place(path).map(|placement| placement.path)
    }

    fn file_exists(&self, path: &str) -> bool {
        self.inner.file_exists(path)
    }

    fn add_file(&mut self, path: &str, contents: &[u8]) -> Result<()> {
        self.inner.add_file(path, contents)
    }

    fn delete_file(&mut self, path: &str) -> Result<()> {
        self.inner.delete_file(path)
    }

    fn list_directories(&self, path: &str) -> Result<Vec<String>> {
        let mut directories = self.inner.list_directories(path)?;
        if self.classifier.is_under_compile_folder(path) {
            directories.retain(|name| !self.classifier.is_generated_folder(name));
        }
        Ok(directories)
    }

    fn add_reference(&mut self, reference_path: &str) -> Result<()> {
        let project_name = self.project_name();
        self.markers.add(&mut self.inner, reference_path, &project_name)
    }

    fn remove_reference(&mut self, name: &str) -> Result<()> {
        self.remove_reference_with_outcome(name).map(|_| ())
    }

    fn add_framework_reference(&mut self, name: &str) -> Result<()> {
        self.inner.add_framework_reference(name)
    }

    fn get_property(&self, name: &str) -> Result<Option<PropertyValue>> {
        require(name, "name")?;
        if path::eq_ignore_case(name, &self.root_namespace_property) {
            return Ok(Some(PropertyValue::String(self.root_namespace.clone())));
        }
        self.inner.get_property(name)
    }

    fn exclude_file(&self, _path: &str) -> bool {
        false
    }
}

impl<P: ProjectSystem> BatchProcessor for WebSiteProjectSystem<P> {
    fn begin_processing<S: AsRef<str>>(&mut self, batch: &[S], action: PackageAction) {
        tracing::debug!("Beginning {} batch of {} paths", action, batch.len());
        self.exclusions
            .start(batch.iter().map(|p| path::normalize(p.as_ref())), &self.classifier);
    }

    fn end_processing(&mut self) {
        self.exclusions.end();
    }
}

/// An open batch on a [`WebSiteProjectSystem`]; ends the batch on drop.
#[derive(Debug)]
pub struct Batch<'a, P: ProjectSystem> {
    project: &'a mut WebSiteProjectSystem<P>,
}

impl<P: ProjectSystem> Deref for Batch<'_, P> {
    type Target = WebSiteProjectSystem<P>;

    fn deref(&self) -> &Self::Target {
        self.project
    }
}

impl<P: ProjectSystem> DerefMut for Batch<'_, P> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.project
    }
}

impl<P: ProjectSystem> Drop for Batch<'_, P> {
    fn drop(&mut self) {
        self.project.end_processing();
    }
}
