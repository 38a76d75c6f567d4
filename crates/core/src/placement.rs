//! Placement of incoming files
//!
//! Loose source files only compile when they live under the compile folder,
//! so they are relocated there unless the current batch exempts them.

use std::fmt;

use crate::batch::ExclusionTracker;
use crate::classify::PathClassifier;
use crate::utils::path;

/// Why a path ended up where it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementKind {
    /// Nested under another path of the same batch.
    Excluded,
    /// Already inside the compile folder.
    InCompileFolder,
    /// Not a source file, placed as requested.
    NotSource,
    /// Moved beneath the compile folder.
    Relocated,
}

impl fmt::Display for PlacementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PlacementKind::Excluded => "kept (batch)",
            PlacementKind::InCompileFolder => "kept (compile folder)",
            PlacementKind::NotSource => "kept",
            PlacementKind::Relocated => "relocated",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub path: String,
    pub kind: PlacementKind,
}

/// Applies the relocation rule against the exclusions of the open batch.
#[derive(Debug, Clone, Copy)]
pub struct PlacementResolver<'a> {
    classifier: &'a PathClassifier,
    exclusions: &'a ExclusionTracker,
}

impl<'a> PlacementResolver<'a> {
    pub fn new(classifier: &'a PathClassifier, exclusions: &'a ExclusionTracker) -> Self {
        Self {
            classifier,
            exclusions,
        }
    }

    pub fn place(&self, file: &str) -> Placement {
        let kind = if self.exclusions.is_excluded(file) {
            PlacementKind::Excluded
        } else if self.classifier.is_under_compile_folder(file) {
            PlacementKind::InCompileFolder
        } else if !self.classifier.is_source_file(file) {
            PlacementKind::NotSource
        } else {
            PlacementKind::Relocated
        };

        let path = match kind {
            PlacementKind::Relocated => path::join(self.classifier.compile_folder(), file),
            _ => file.to_string(),
        };

        Placement { path, kind }
    }
}
