//! Batch bracketing interface

use crate::types::PackageAction;

/// Receives the full set of paths of a multi-file operation before any of
/// them is processed, and a signal once the operation is over.
///
/// Calls must be paired: one `begin_processing`, then exactly one
/// `end_processing`, before the next batch begins.
pub trait BatchProcessor {
    fn begin_processing<S: AsRef<str>>(&mut self, batch: &[S], action: PackageAction);

    fn end_processing(&mut self);
}
