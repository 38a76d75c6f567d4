use anyhow::Result;
use sitepack_core::ProjectSystem;
use std::path::Path;

pub fn dirs_command(project: &Path, path: &str) -> Result<()> {
    let site = super::open_project(project)?;
    for directory in site.list_directories(path)? {
        println!("{}", directory);
    }
    Ok(())
}
