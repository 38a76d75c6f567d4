use anyhow::{bail, Result};
use sitepack_core::ProjectSystem;
use std::path::Path;

pub fn property_command(project: &Path, name: &str) -> Result<()> {
    let site = super::open_project(project)?;
    match site.get_property(name)? {
        Some(value) => println!("{}", value),
        None => bail!("Property '{}' is not set for {}", name, site.project_name()),
    }
    Ok(())
}
