pub mod property;

use serde::{Deserialize, Serialize};
use std::fmt;

/// What a package-installation engine is doing with a batch of files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackageAction {
    Install,
    Uninstall,
}

impl fmt::Display for PackageAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PackageAction::Install => f.write_str("install"),
            PackageAction::Uninstall => f.write_str("uninstall"),
        }
    }
}

// Re-export commonly used types
pub use property::PropertyValue;
