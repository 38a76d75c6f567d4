use anyhow::Result;
use sitepack_core::ProjectSystem;
use std::path::Path;

use crate::display::format_removal;

pub fn add_reference_command(project: &Path, assembly: &str) -> Result<()> {
    let mut site = super::open_project(project)?;
    site.add_reference(assembly)?;
    println!(
        "✅ Added reference {} ({})",
        assembly,
        site.markers().marker_path(assembly)
    );
    Ok(())
}

pub fn remove_reference_command(project: &Path, name: &str) -> Result<()> {
    let mut site = super::open_project(project)?;
    let outcome = site.remove_reference_with_outcome(name)?;
    println!("{}", format_removal(name, &outcome));
    Ok(())
}
