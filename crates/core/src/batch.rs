//! Batch exclusion tracking
//!
//! When a package submits a path together with files nested beneath it, the
//! nested source files keep the location the package gave them instead of
//! being moved into the compile folder. The set of such files only lives for
//! one bracketed operation.

use std::collections::HashSet;

use crate::classify::PathClassifier;
use crate::utils::path;

/// Source files exempted from relocation for the batch in progress.
///
/// Only one batch may be open at a time. Starting a second batch before
/// ending the first silently replaces the exclusions.
#[derive(Debug, Default)]
pub struct ExclusionTracker {
    excluded: HashSet<String>,
}

impl ExclusionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Computes the exclusion set for `batch`, replacing any previous one.
    pub fn start<I, S>(&mut self, batch: I, classifier: &PathClassifier)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut files: Vec<String> = batch
            .into_iter()
            .map(|p| p.as_ref().to_string())
            .collect();
        files.sort();

        self.excluded.clear();
        for path1 in &files {
            for path2 in &files {
                if path::eq_ignore_case(path1, path2) {
                    continue;
                }

                if path::starts_with_ignore_case(path1, path2) && classifier.is_source_file(path1) {
                    self.excluded.insert(path::fold(path1));
                }
            }
        }

        tracing::debug!(
            "Batch of {} paths excludes {} source file(s) from relocation",
            files.len(),
            self.excluded.len()
        );
    }

    /// Clears the exclusion set. Safe to call without a matching `start`.
    pub fn end(&mut self) {
        self.excluded.clear();
    }

    pub fn is_excluded(&self, file: &str) -> bool {
        self.excluded.contains(&path::fold(file))
    }

    pub fn len(&self) -> usize {
        self.excluded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.excluded.is_empty()
    }
}
