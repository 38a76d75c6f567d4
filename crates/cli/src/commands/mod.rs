pub mod dirs;
pub mod init;
pub mod install;
pub mod property;
pub mod reference;
pub mod resolve;
pub mod settings;

pub use dirs::dirs_command;
pub use init::init_command;
pub use install::{install_command, uninstall_command};
pub use property::property_command;
pub use reference::{add_reference_command, remove_reference_command};
pub use resolve::resolve_command;
pub use settings::settings_command;

use anyhow::{Context, Result};
use sitepack_core::LocalWebSite;
use std::path::Path;

/// Opens the website project at `project`, failing when the folder is missing.
pub(crate) fn open_project(project: &Path) -> Result<LocalWebSite> {
    let root = project
        .canonicalize()
        .with_context(|| format!("Project folder not found: {}", project.display()))?;
    sitepack_core::open_local(&root)
        .with_context(|| format!("Failed to open project at {}", root.display()))
}
