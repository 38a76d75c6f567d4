use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAMES: [&str; 2] = [".sitepack.json", "sitepack.json"];

/// Folder conventions of a website-style project.
///
/// Every field has a default matching the host's dynamic-compilation model,
/// so an empty `{}` file is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default)]
pub struct AdapterConfig {
    /// Folder under the project root whose source files get compiled.
    pub compile_folder: String,
    /// Host-generated folder beneath `compile_folder`, hidden from listings.
    pub generated_folder: String,
    /// Extensions (with or without the leading dot) that mark source files.
    pub source_extensions: Vec<String>,
    /// Folder holding reference markers.
    pub reference_folder: String,
    pub marker_extension: String,
    /// Tried in order when a reference is removed by bare assembly name.
    pub assembly_extensions: Vec<String>,
    pub root_namespace_property: String,
    pub root_namespace: String,

    /// Host-reported properties, used when no IDE host is attached.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, serde_json::Value>,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            compile_folder: "App_Code".to_string(),
            generated_folder: "Generated___Files".to_string(),
            source_extensions: vec![".cs".to_string(), ".vb".to_string()],
            reference_folder: "bin".to_string(),
            marker_extension: ".refresh".to_string(),
            assembly_extensions: vec![".dll".to_string(), ".exe".to_string()],
            root_namespace_property: "RootNamespace".to_string(),
            root_namespace: "ASP".to_string(),
            properties: BTreeMap::new(),
        }
    }
}

impl AdapterConfig {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Walks up from `start_path` looking for a sitepack config file.
    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path;

        loop {
            for name in CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    return Some(config_path);
                }
            }

            current = current.parent()?;
        }
    }

    /// Loads the config governing `project_root`, or the defaults when none exists.
    pub fn for_project(project_root: &Path) -> Result<Self> {
        match Self::find_config_file(project_root) {
            Some(path) => {
                tracing::debug!("Loading adapter config from {:?}", path);
                Self::load_from_file(&path)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        let required = [
            ("compile_folder", &self.compile_folder),
            ("generated_folder", &self.generated_folder),
            ("reference_folder", &self.reference_folder),
            ("marker_extension", &self.marker_extension),
            ("root_namespace_property", &self.root_namespace_property),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(Error::ConfigError(format!("'{field}' must not be empty")));
            }
        }

        if self.compile_folder.contains(['/', '\\']) {
            return Err(Error::ConfigError(format!(
                "compile_folder '{}' must be a single folder name",
                self.compile_folder
            )));
        }

        if let Some(ext) = self
            .source_extensions
            .iter()
            .chain(&self.assembly_extensions)
            .chain(std::iter::once(&self.marker_extension))
            .find(|ext| ext.trim_start_matches('.').is_empty())
        {
            return Err(Error::ConfigError(format!("invalid extension '{ext}'")));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_empty_object_yields_defaults() {
        let parsed: AdapterConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, AdapterConfig::default());
        assert_eq!(parsed.compile_folder, "App_Code");
        assert_eq!(parsed.root_namespace, "ASP");
    }

    #[test]
    fn test_partial_override() {
        let parsed: AdapterConfig = serde_json::from_str(
            r#"{ "compile_folder": "Code", "source_extensions": ["fs"] }"#,
        )
        .unwrap();
        assert_eq!(parsed.compile_folder, "Code");
        assert_eq!(parsed.source_extensions, vec!["fs".to_string()]);
        assert_eq!(parsed.reference_folder, "bin");
    }

    #[test]
    fn test_find_config_walks_up() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("site").join("sub");
        std::fs::create_dir_all(&nested).unwrap();

        AdapterConfig::default()
            .save_to_file(&temp_dir.path().join(".sitepack.json"))
            .unwrap();

        let found = AdapterConfig::find_config_file(&nested).unwrap();
        assert_eq!(found, temp_dir.path().join(".sitepack.json"));
        assert!(AdapterConfig::for_project(&nested).is_ok());
    }

    #[test]
    fn test_validate_rejects_nested_compile_folder() {
        let config = AdapterConfig {
            compile_folder: "App/Code".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::ConfigError(_))));

        let config = AdapterConfig {
            source_extensions: vec![".".to_string()],
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bare_dot_marker_extension() {
        for marker_extension in [".", "..", "refresh"] {
            let config = AdapterConfig {
                marker_extension: marker_extension.to_string(),
                ..Default::default()
            };
            assert_eq!(config.validate().is_ok(), marker_extension == "refresh");
        }
    }

    #[test]
    fn test_unparseable_file_is_a_serialization_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(".sitepack.json");
        std::fs::write(&path, "{ \"compile_folder\": ").unwrap();
        assert!(matches!(
            AdapterConfig::load_from_file(&path),
            Err(Error::SerializationError(_))
        ));
    }
}
