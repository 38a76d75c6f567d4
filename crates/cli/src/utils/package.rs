use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const ASSEMBLY_EXTENSIONS: [&str; 2] = ["dll", "exe"];

/// Files a package folder contributes to a project.
///
/// A folder with a `content/` subfolder contributes that subfolder's files and
/// the assemblies under `lib/`; any other folder is taken as content whole.
#[derive(Debug, Clone, Default)]
pub struct PackageContents {
    pub content_root: PathBuf,
    /// Every folder and file under the content root, relative, `/`-separated
    pub entries: Vec<String>,
    /// The files among `entries`
    pub files: Vec<String>,
    pub assemblies: Vec<PathBuf>,
}

impl PackageContents {
    pub fn scan(source: &Path) -> Result<Self> {
        if !source.is_dir() {
            bail!("Package folder not found: {}", source.display());
        }

        let content = source.join("content");
        let lib = source.join("lib");
        let structured = content.is_dir() || lib.is_dir();
        let content_root = if structured { content } else { source.to_path_buf() };

        let mut contents = Self {
            content_root,
            ..Default::default()
        };

        if contents.content_root.is_dir() {
            for entry in WalkDir::new(&contents.content_root)
                .min_depth(1)
                .sort_by_file_name()
            {
                let entry = entry.context("Failed to read package content")?;
                let relative = relative_path(&contents.content_root, entry.path())?;
                if entry.file_type().is_file() {
                    contents.files.push(relative.clone());
                }
                contents.entries.push(relative);
            }
        }

        if structured && lib.is_dir() {
            for entry in WalkDir::new(&lib).sort_by_file_name() {
                let entry = entry.context("Failed to read package assemblies")?;
                if entry.file_type().is_file() && is_assembly(entry.path()) {
                    contents.assemblies.push(entry.into_path());
                }
            }
        }

        Ok(contents)
    }
}

fn relative_path(root: &Path, path: &Path) -> Result<String> {
    let relative = path
        .strip_prefix(root)
        .with_context(|| format!("{} is outside {}", path.display(), root.display()))?;
    Ok(relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/"))
}

fn is_assembly(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            ASSEMBLY_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}
