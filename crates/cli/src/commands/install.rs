use anyhow::{Context, Result};
use sitepack_core::{PackageAction, ProjectSystem};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::display::{format_removal, print_placement};
use crate::utils::PackageContents;

pub fn install_command(project: &Path, source: &Path, dry_run: bool) -> Result<()> {
    let package = PackageContents::scan(source)?;
    let mut site = super::open_project(project)?;
    println!(
        "📦 Installing {} into {}",
        source.display(),
        site.project_name()
    );

    {
        let mut batch = site.batch(&package.entries, PackageAction::Install);
        for file in &package.files {
            if batch.exclude_file(file) {
                debug!("Skipping excluded file {}", file);
                continue;
            }

            let placement = batch.place(file)?;
            print_placement(file, &placement);
            if dry_run {
                continue;
            }

            let contents = fs::read(package.content_root.join(file))
                .with_context(|| format!("Failed to read package file {}", file))?;
            batch
                .add_file(&placement.path, &contents)
                .with_context(|| format!("Failed to add {}", placement.path))?;
        }
    }

    for assembly in &package.assemblies {
        let assembly = assembly.to_string_lossy();
        println!("🔗 Reference {}", assembly);
        if !dry_run {
            site.add_reference(&assembly)?;
        }
    }

    info!(
        "Installed {} files and {} references",
        package.files.len(),
        package.assemblies.len()
    );
    if dry_run {
        println!("\n🔍 Dry run, nothing was written");
    } else {
        println!("\n✅ Installed {} files", package.files.len());
    }
    Ok(())
}

pub fn uninstall_command(project: &Path, source: &Path, dry_run: bool) -> Result<()> {
    let package = PackageContents::scan(source)?;
    let mut site = super::open_project(project)?;
    println!(
        "🧹 Uninstalling {} from {}",
        source.display(),
        site.project_name()
    );

    let mut removed = 0;
    {
        let mut batch = site.batch(&package.entries, PackageAction::Uninstall);
        for file in &package.files {
            let placement = batch.place(file)?;
            if !batch.file_exists(&placement.path) {
                debug!("{} is not in the project", placement.path);
                continue;
            }

            println!("   • {}", placement.path);
            if !dry_run {
                batch
                    .delete_file(&placement.path)
                    .with_context(|| format!("Failed to delete {}", placement.path))?;
            }
            removed += 1;
        }
    }

    for assembly in &package.assemblies {
        let Some(name) = assembly.file_name() else {
            continue;
        };
        let name = name.to_string_lossy();
        if dry_run {
            println!("🔗 Remove reference {}", name);
            continue;
        }
        let outcome = site.remove_reference_with_outcome(&name)?;
        println!("{}", format_removal(&name, &outcome));
    }

    if dry_run {
        println!("\n🔍 Dry run, nothing was deleted");
    } else {
        println!("\n✅ Removed {} files", removed);
    }
    Ok(())
}
