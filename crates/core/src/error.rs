use std::io;

use crate::settings::SettingsError;

/// Errors that can occur during sitepack operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Argument '{0}' cannot be null or empty")]
    InvalidArgument(&'static str),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Failed to add reference to '{name}' in project '{project}': {source}")]
    ReferenceAddition {
        name: String,
        project: String,
        #[source]
        source: Box<Error>,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Settings error: {0}")]
    SettingsError(#[from] SettingsError),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type alias for sitepack operations
pub type Result<T> = std::result::Result<T, Error>;

/// Rejects empty string arguments before any I/O happens.
pub(crate) fn require(value: &str, argument: &'static str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::InvalidArgument(argument));
    }
    Ok(())
}
