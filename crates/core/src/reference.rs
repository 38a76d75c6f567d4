//! Reference emulation through marker files
//!
//! Website projects have no place to record assembly references. Instead a
//! `<assembly>.refresh` file in the `bin` folder holds the path of the
//! referenced assembly, and the host's build tooling copies it from there.
//! A marker's presence is the only sign that a reference belongs to us;
//! anything else is left to the host.

use crate::config::AdapterConfig;
use crate::error::{require, Error, Result};
use crate::interfaces::ProjectSystem;
use crate::utils::path;

/// What `remove` did for a reference name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemovalOutcome {
    /// The marker at this path was deleted.
    MarkerDeleted(String),
    /// A marker existed but could not be deleted; the failure was logged.
    MarkerKept(String),
    /// No marker exists, removal went through the host.
    Delegated,
}

#[derive(Debug, Clone)]
pub struct ReferenceMarkers {
    folder: String,
    extension: String,
    assembly_extensions: Vec<String>,
}

impl ReferenceMarkers {
    pub fn new(config: &AdapterConfig) -> Self {
        Self {
            folder: path::normalize(&config.reference_folder),
            extension: format!(".{}", config.marker_extension.trim_start_matches('.')),
            assembly_extensions: config
                .assembly_extensions
                .iter()
                .map(|ext| format!(".{}", ext.trim_start_matches('.')))
                .collect(),
        }
    }

    /// Marker location for an assembly path or file name, e.g.
    /// `bin/Foo.dll.refresh` for `lib/net40/Foo.dll`.
    pub fn marker_path(&self, assembly: &str) -> String {
        path::join(
            &self.folder,
            &format!("{}{}", path::file_name(assembly), self.extension),
        )
    }

    /// Marker paths that may belong to `name`. A bare assembly name also
    /// matches markers of the same name with any known assembly extension.
    pub fn candidates(&self, name: &str) -> Vec<String> {
        let mut candidates = vec![self.marker_path(name)];
        let has_assembly_extension = path::extension(name).is_some_and(|ext| {
            self.assembly_extensions
                .iter()
                .any(|known| path::eq_ignore_case(known, ext))
        });
        if !has_assembly_extension {
            for ext in &self.assembly_extensions {
                candidates.push(self.marker_path(&format!("{}{}", path::file_name(name), ext)));
            }
        }
        candidates
    }

    /// Writes the marker for the assembly at `reference_path`.
    ///
    /// Any failure is fatal to the caller and names the assembly and project.
    pub fn add<P: ProjectSystem>(
        &self,
        project: &mut P,
        reference_path: &str,
        project_name: &str,
    ) -> Result<()> {
        require(reference_path, "reference_path")?;
        let name = path::file_stem(reference_path).to_string();
        let assembly = path::absolute(project.root(), reference_path);
        let marker = self.marker_path(reference_path);

        project
            .add_file(&marker, assembly.to_string_lossy().as_bytes())
            .map_err(|source| Error::ReferenceAddition {
                name: name.clone(),
                project: project_name.to_string(),
                source: Box::new(source),
            })?;

        tracing::debug!("Added reference '{}' to project '{}'", name, project_name);
        Ok(())
    }

    /// Deletes the marker for `name`, or hands removal to the project's own
    /// reference handling when there is none.
    ///
    /// Marker deletion is best effort: failures are logged and swallowed.
    pub fn remove<P: ProjectSystem>(&self, project: &mut P, name: &str) -> Result<RemovalOutcome> {
        require(name, "name")?;

        let Some(marker) = self
            .candidates(name)
            .into_iter()
            .find(|candidate| project.file_exists(candidate))
        else {
            tracing::debug!("No marker for '{}', removing through the host", name);
            project.remove_reference(name)?;
            return Ok(RemovalOutcome::Delegated);
        };

        match project.delete_file(&marker) {
            Ok(()) => {
                tracing::debug!("Removed reference marker {}", marker);
                Ok(RemovalOutcome::MarkerDeleted(marker))
            }
            Err(e) => {
                tracing::warn!("{}", e);
                Ok(RemovalOutcome::MarkerKept(marker))
            }
        }
    }
}

impl Default for ReferenceMarkers {
    fn default() -> Self {
        Self::new(&AdapterConfig::default())
    }
}
