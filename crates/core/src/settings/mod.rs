//! User settings store
//!
//! A flat section/key store persisted as XML:
//!
//! ```xml
//! <configuration>
//!   <packageSources>
//!     <add key="local" value="/srv/packages" />
//!   </packageSources>
//! </configuration>
//! ```

mod document;
mod user_settings;

use std::io;

pub use user_settings::UserSettings;

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Argument '{0}' cannot be null or empty")]
    InvalidArgument(&'static str),

    #[error("Unable to parse config file: {0}")]
    Parse(#[source] quick_xml::Error),

    #[error("Unable to parse config file: {0}")]
    Malformed(&'static str),

    #[error("Unable to write config file: {0}")]
    Write(#[source] quick_xml::Error),

    #[error("Settings IO error: {0}")]
    Io(#[from] io::Error),
}
