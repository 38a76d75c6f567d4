//! Configuration management for sitepack

mod adapter;

// Re-export main types
pub use adapter::{AdapterConfig, CONFIG_FILE_NAMES};
