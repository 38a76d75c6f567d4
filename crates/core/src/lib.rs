//! sitepack - Place package files into website-style projects
//!
//! Website projects have no project file listing their sources; the host
//! compiles whatever sits in a reserved folder. This crate provides:
//! - Relocation of incoming source files into the compile folder, with
//!   batch-aware exemptions for files a package nests under its own paths
//! - Assembly references emulated through marker files
//! - A directory view that hides host-generated folders
//! - A section/key user settings store
pub mod batch;
pub mod classify;
pub mod config;
pub mod error;
pub mod interfaces;
pub mod placement;
pub mod reference;
pub mod services;
pub mod settings;
pub mod types;
pub mod utils;
pub mod website;

// Re-export commonly used types and traits
pub use error::{Error, Result};
pub use types::*;

// Re-export main API components
pub use config::AdapterConfig;
pub use interfaces::{BatchProcessor, FileSystem, HostProject, ProjectSystem};
pub use placement::{Placement, PlacementKind};
pub use reference::RemovalOutcome;
pub use services::{BaseProjectSystem, PhysicalFileSystem, StandaloneHost};
pub use settings::{SettingsError, UserSettings};
pub use website::{Batch, WebSiteProjectSystem};

/// Website project over the local filesystem with a standalone host.
pub type LocalWebSite = WebSiteProjectSystem<BaseProjectSystem<PhysicalFileSystem, StandaloneHost>>;

/// Opens the website project rooted at `root`, honouring any
/// `.sitepack.json` found there or above.
pub fn open_local(root: impl Into<std::path::PathBuf>) -> Result<LocalWebSite> {
    let root = root.into();
    let config = AdapterConfig::for_project(&root)?;
    let host = StandaloneHost::from_config(&root, &config);
    let base = BaseProjectSystem::new(PhysicalFileSystem::new(root), host);
    Ok(WebSiteProjectSystem::with_config(base, &config))
}
