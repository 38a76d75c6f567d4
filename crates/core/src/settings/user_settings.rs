use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::document::{self, Element};
use super::SettingsError;

type Result<T> = std::result::Result<T, SettingsError>;

const ROOT_ELEMENT: &str = "configuration";
const ENTRY_ELEMENT: &str = "add";

/// Section/key settings backed by an XML file. Every mutation is written
/// back immediately.
#[derive(Debug)]
pub struct UserSettings {
    path: PathBuf,
    document: Element,
}

impl UserSettings {
    /// Loads the settings at `path`, starting from an empty document when the
    /// file does not exist yet.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let document = match fs::read_to_string(&path) {
            Ok(contents) => document::parse(&contents)?,
            Err(err) if err.kind() == ErrorKind::NotFound => Element::new(ROOT_ELEMENT),
            Err(err) => return Err(err.into()),
        };
        Ok(Self { path, document })
    }

    /// Per-user settings file: `NuGet/NuGet.Config` under the roaming
    /// application data folder, or the XDG config folder elsewhere.
    pub fn default_location() -> Option<PathBuf> {
        let base = std::env::var_os("APPDATA")
            .or_else(|| std::env::var_os("XDG_CONFIG_HOME"))
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))?;
        Some(base.join("NuGet").join("NuGet.Config"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get_value(&self, section: &str, key: &str) -> Result<Option<String>> {
        require(section, "section")?;
        require(key, "key")?;

        Ok(self
            .document
            .child(section)
            .and_then(|section| {
                section
                    .children_named(ENTRY_ELEMENT)
                    .find(|entry| entry.attribute("key") == Some(key))
            })
            .and_then(|entry| entry.attribute("value"))
            .map(str::to_string))
    }

    /// All complete key/value pairs of a section, or `None` when the section
    /// does not exist.
    pub fn get_values(&self, section: &str) -> Result<Option<Vec<(String, String)>>> {
        require(section, "section")?;

        Ok(self.document.child(section).map(|section| {
            section
                .children_named(ENTRY_ELEMENT)
                .filter_map(|entry| match (entry.attribute("key"), entry.attribute("value")) {
                    (Some(key), Some(value)) if !key.is_empty() => {
                        Some((key.to_string(), value.to_string()))
                    }
                    _ => None,
                })
                .collect()
        }))
    }

    pub fn set_value(&mut self, section: &str, key: &str, value: &str) -> Result<()> {
        self.set_value_internal(section, key, value)?;
        self.save()
    }

    /// Sets several values and saves once. Nothing is written when any
    /// argument is invalid.
    pub fn set_values(&mut self, section: &str, values: &[(String, String)]) -> Result<()> {
        require(section, "section")?;
        if values.iter().any(|(key, _)| key.is_empty()) {
            return Err(SettingsError::InvalidArgument("key"));
        }

        for (key, value) in values {
            self.set_value_internal(section, key, value)?;
        }
        self.save()
    }

    pub fn delete_value(&mut self, section: &str, key: &str) -> Result<bool> {
        require(section, "section")?;
        require(key, "key")?;

        let Some(section) = self.document.child_mut(section) else {
            return Ok(false);
        };
        let Some(index) = section
            .children
            .iter()
            .position(|e| e.name == ENTRY_ELEMENT && e.attribute("key") == Some(key))
        else {
            return Ok(false);
        };

        section.children.remove(index);
        self.save()?;
        Ok(true)
    }

    pub fn delete_section(&mut self, section: &str) -> Result<bool> {
        require(section, "section")?;

        let Some(index) = self
            .document
            .children
            .iter()
            .position(|e| e.name == section)
        else {
            return Ok(false);
        };

        self.document.children.remove(index);
        self.save()?;
        Ok(true)
    }

    fn set_value_internal(&mut self, section: &str, key: &str, value: &str) -> Result<()> {
        require(section, "section")?;
        require(key, "key")?;

        if self.document.child(section).is_none() {
            self.document.children.push(Element::new(section));
        }
        let Some(section) = self.document.child_mut(section) else {
            return Err(SettingsError::Malformed("section vanished while editing"));
        };

        match section
            .children
            .iter_mut()
            .find(|e| e.name == ENTRY_ELEMENT && e.attribute("key") == Some(key))
        {
            Some(entry) => entry.set_attribute("value", value),
            None => {
                let mut entry = Element::new(ENTRY_ELEMENT);
                entry.set_attribute("key", key);
                entry.set_attribute("value", value);
                section.children.push(entry);
            }
        }
        Ok(())
    }

    fn save(&self) -> Result<()> {
        let bytes = document::write(&self.document)?;
        write_atomic(&self.path, &bytes)?;
        tracing::debug!("Saved settings to {:?}", self.path);
        Ok(())
    }
}

fn require(value: &str, argument: &'static str) -> Result<()> {
    if value.is_empty() {
        return Err(SettingsError::InvalidArgument(argument));
    }
    Ok(())
}

fn write_atomic(path: &Path, data: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let tmp_path = path.with_extension("tmp");
    fs::write(&tmp_path, data)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_starts_empty() {
        let dir = tempdir().unwrap();
        let settings = UserSettings::load(dir.path().join("NuGet.Config")).unwrap();
        assert_eq!(settings.get_value("packageSources", "local").unwrap(), None);
        assert_eq!(settings.get_values("packageSources").unwrap(), None);
        assert!(!settings.path().exists());
    }

    #[test]
    fn test_set_persists_and_overwrites() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("NuGet.Config");

        {
            let mut settings = UserSettings::load(&path).unwrap();
            settings.set_value("packageSources", "local", "/srv/a").unwrap();
            settings.set_value("packageSources", "local", "/srv/b").unwrap();
            settings.set_value("apiKeys", "https://feed/", "k").unwrap();
        }

        let settings = UserSettings::load(&path).unwrap();
        assert_eq!(
            settings.get_value("packageSources", "local").unwrap().as_deref(),
            Some("/srv/b")
        );
        assert_eq!(
            settings.get_values("packageSources").unwrap(),
            Some(vec![("local".to_string(), "/srv/b".to_string())])
        );
        assert_eq!(settings.get_value("apiKeys", "https://feed/").unwrap().as_deref(), Some("k"));
    }

    #[test]
    fn test_get_values_skips_incomplete_entries() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("NuGet.Config");
        fs::write(
            &path,
            r#"<configuration><s><add key="a" value="1"/><add key="" value="2"/><add key="c"/><other key="d" value="4"/></s></configuration>"#,
        )
        .unwrap();

        let settings = UserSettings::load(&path).unwrap();
        assert_eq!(
            settings.get_values("s").unwrap(),
            Some(vec![("a".to_string(), "1".to_string())])
        );
        assert_eq!(settings.get_value("s", "c").unwrap(), None);
    }

    #[test]
    fn test_set_values_saves_once_and_validates_first() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("NuGet.Config");
        let mut settings = UserSettings::load(&path).unwrap();

        let bad = vec![("a".to_string(), "1".to_string()), (String::new(), "2".to_string())];
        assert!(matches!(
            settings.set_values("s", &bad),
            Err(SettingsError::InvalidArgument("key"))
        ));
        assert!(!path.exists());

        let good = vec![("a".to_string(), "1".to_string()), ("b".to_string(), "2".to_string())];
        settings.set_values("s", &good).unwrap();
        let reloaded = UserSettings::load(&path).unwrap();
        assert_eq!(reloaded.get_values("s").unwrap(), Some(good));
    }

    #[test]
    fn test_delete_value_and_section() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("NuGet.Config");
        let mut settings = UserSettings::load(&path).unwrap();
        settings.set_value("s", "a", "1").unwrap();
        settings.set_value("s", "b", "2").unwrap();

        assert!(settings.delete_value("s", "a").unwrap());
        assert!(!settings.delete_value("s", "a").unwrap());
        assert!(!settings.delete_value("missing", "a").unwrap());
        assert!(settings.delete_section("s").unwrap());
        assert!(!settings.delete_section("s").unwrap());

        let reloaded = UserSettings::load(&path).unwrap();
        assert_eq!(reloaded.get_values("s").unwrap(), None);
    }

    #[test]
    fn test_empty_arguments_are_rejected() {
        let dir = tempdir().unwrap();
        let mut settings = UserSettings::load(dir.path().join("NuGet.Config")).unwrap();
        assert!(matches!(
            settings.get_value("", "k"),
            Err(SettingsError::InvalidArgument("section"))
        ));
        assert!(matches!(
            settings.set_value("s", "", "v"),
            Err(SettingsError::InvalidArgument("key"))
        ));
        assert!(matches!(settings.delete_section(""), Err(SettingsError::InvalidArgument(_))));
        assert!(!settings.path().exists());
    }

    #[test]
    fn test_unparseable_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("NuGet.Config");
        fs::write(&path, "<configuration><broken></configuration>").unwrap();
        assert!(UserSettings::load(&path).is_err());
    }
}
