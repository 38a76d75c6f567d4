//! Physical file system implementation
//!
//! Standard std::fs backed file operations rooted at the project directory.

use crate::error::Result;
use crate::interfaces::FileSystem;
use crate::utils::path;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// FileSystem over a directory on disk
#[derive(Debug, Clone)]
pub struct PhysicalFileSystem {
    root: PathBuf,
}

impl PhysicalFileSystem {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl FileSystem for PhysicalFileSystem {
    fn root(&self) -> &Path {
        &self.root
    }

    fn full_path(&self, path: &str) -> PathBuf {
        path::absolute(&self.root, path)
    }

    fn file_exists(&self, path: &str) -> bool {
        self.full_path(path).is_file()
    }

    fn delete_file(&mut self, path: &str) -> Result<()> {
        let full_path = self.full_path(path);
        match fs::remove_file(&full_path) {
            Ok(()) => {
                tracing::debug!("Removed file {:?}", full_path);
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn add_file(&mut self, path: &str, contents: &[u8]) -> Result<()> {
        let full_path = self.full_path(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&full_path, contents)?;
        tracing::debug!("Wrote {} bytes to {:?}", contents.len(), full_path);
        Ok(())
    }

    fn directories(&self, path: &str) -> Result<Vec<String>> {
        let entries = match fs::read_dir(self.full_path(path)) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        names.sort();
        Ok(names)
    }
}
