use anyhow::Result;
use sitepack_core::PackageAction;
use std::path::Path;

use crate::display::print_placement;

/// Paths are treated as one install batch, so nested paths keep their place.
pub fn resolve_command(project: &Path, paths: &[String]) -> Result<()> {
    let mut site = super::open_project(project)?;
    let batch = site.batch(paths, PackageAction::Install);
    for path in paths {
        let placement = batch.place(path)?;
        print_placement(path, &placement);
    }
    Ok(())
}
