//! Standalone host implementation
//!
//! Stands in for an IDE automation model when the adapter runs from the
//! command line or in tests. References and removals are recorded in memory.

use crate::config::AdapterConfig;
use crate::error::Result;
use crate::interfaces::HostProject;
use crate::types::PropertyValue;
use crate::utils::path;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default)]
pub struct StandaloneHost {
    full_path: PathBuf,
    properties: Vec<(String, PropertyValue)>,
    references: Vec<PathBuf>,
    framework_references: Vec<String>,
    removed_references: Vec<String>,
}

impl StandaloneHost {
    pub fn new(full_path: impl Into<PathBuf>) -> Self {
        Self {
            full_path: full_path.into(),
            ..Default::default()
        }
    }

    /// Host whose properties come from the `properties` table of `config`.
    pub fn from_config(full_path: impl Into<PathBuf>, config: &AdapterConfig) -> Self {
        let mut host = Self::new(full_path);
        for (name, value) in &config.properties {
            host.set_property(name, PropertyValue::from(value.clone()));
        }
        host
    }

    pub fn with_property(mut self, name: &str, value: impl Into<PropertyValue>) -> Self {
        self.set_property(name, value.into());
        self
    }

    pub fn set_property(&mut self, name: &str, value: PropertyValue) {
        match self
            .properties
            .iter_mut()
            .find(|(existing, _)| path::eq_ignore_case(existing, name))
        {
            Some(entry) => entry.1 = value,
            None => self.properties.push((name.to_string(), value)),
        }
    }

    /// References added through the host, in order
    pub fn references(&self) -> &[PathBuf] {
        &self.references
    }

    pub fn framework_references(&self) -> &[String] {
        &self.framework_references
    }

    /// Every name passed to `remove_reference`, in order
    pub fn removed_references(&self) -> &[String] {
        &self.removed_references
    }
}

impl HostProject for StandaloneHost {
    fn full_path(&self) -> PathBuf {
        self.full_path.clone()
    }

    fn property(&self, name: &str) -> Option<PropertyValue> {
        self.properties
            .iter()
            .find(|(existing, _)| path::eq_ignore_case(existing, name))
            .map(|(_, value)| value.clone())
    }

    fn add_reference(&mut self, path: &Path) -> Result<()> {
        tracing::debug!("Host reference added: {:?}", path);
        self.references.push(path.to_path_buf());
        Ok(())
    }

    fn add_framework_reference(&mut self, name: &str) -> Result<()> {
        tracing::debug!("Host framework reference added: {}", name);
        self.framework_references.push(name.to_string());
        Ok(())
    }

    fn remove_reference(&mut self, name: &str) -> Result<()> {
        self.removed_references.push(name.to_string());
        let before = self.references.len();
        self.references.retain(|reference| {
            let file = reference.to_string_lossy();
            !(path::eq_ignore_case(path::file_name(&file), name)
                || path::eq_ignore_case(path::file_stem(&file), name))
        });
        if self.references.len() == before {
            tracing::debug!("Host has no reference named '{}'", name);
        }
        Ok(())
    }
}
