//! Path classification for website projects
//!
//! Pure predicates over project-relative paths. All comparisons ignore case.

use crate::config::AdapterConfig;
use crate::utils::path;

/// Decides what kind of path the host's folder conventions see.
#[derive(Debug, Clone)]
pub struct PathClassifier {
    compile_folder: String,
    compile_prefix: String,
    generated_folder: String,
    source_extensions: Vec<String>,
}

impl PathClassifier {
    pub fn new(config: &AdapterConfig) -> Self {
        let compile_folder = path::normalize(&config.compile_folder);
        Self {
            compile_prefix: path::fold(&path::ensure_trailing_separator(&compile_folder)),
            compile_folder,
            generated_folder: config.generated_folder.clone(),
            source_extensions: config
                .source_extensions
                .iter()
                .map(|ext| ext.trim_start_matches('.').to_lowercase())
                .collect(),
        }
    }

    pub fn compile_folder(&self) -> &str {
        &self.compile_folder
    }

    /// Whether the host compiles a file with this name when it sits in the
    /// compile folder.
    pub fn is_source_file(&self, file: &str) -> bool {
        let is_source = path::extension(file)
            .map(|ext| ext[1..].to_lowercase())
            .is_some_and(|ext| self.source_extensions.contains(&ext));
        tracing::trace!("is_source_file({}) = {}", file, is_source);
        is_source
    }

    /// True for the compile folder itself and anything beneath it.
    pub fn is_under_compile_folder(&self, file: &str) -> bool {
        path::fold(&path::ensure_trailing_separator(file)).starts_with(&self.compile_prefix)
    }

    pub fn is_generated_folder(&self, name: &str) -> bool {
        path::eq_ignore_case(name, &self.generated_folder)
    }
}

impl Default for PathClassifier {
    fn default() -> Self {
        Self::new(&AdapterConfig::default())
    }
}
