use anyhow::{Context, Result};
use sitepack_core::UserSettings;
use std::path::PathBuf;

use crate::cli::SettingsAction;

pub fn settings_command(file: Option<PathBuf>, action: SettingsAction) -> Result<()> {
    let path = match file {
        Some(path) => path,
        None => UserSettings::default_location()
            .context("Could not determine the user settings location; pass --file")?,
    };
    let mut settings = UserSettings::load(&path)
        .with_context(|| format!("Failed to load settings from {}", path.display()))?;

    match action {
        SettingsAction::Get { section, key } => {
            if let Some(value) = settings.get_value(&section, &key)? {
                println!("{}", value);
            }
        }
        SettingsAction::List { section } => match settings.get_values(&section)? {
            Some(values) => {
                for (key, value) in values {
                    println!("{} = {}", key, value);
                }
            }
            None => println!("ℹ️  Section '{}' does not exist", section),
        },
        SettingsAction::Set {
            section,
            key,
            value,
        } => {
            settings.set_value(&section, &key, &value)?;
            println!("✅ Set {}/{}", section, key);
        }
        SettingsAction::Delete { section, key } => {
            if settings.delete_value(&section, &key)? {
                println!("✅ Deleted {}/{}", section, key);
            } else {
                println!("ℹ️  {}/{} was not set", section, key);
            }
        }
        SettingsAction::DeleteSection { section } => {
            if settings.delete_section(&section)? {
                println!("✅ Deleted section {}", section);
            } else {
                println!("ℹ️  Section '{}' does not exist", section);
            }
        }
    }
    Ok(())
}
