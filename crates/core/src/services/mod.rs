//! Service implementations for the composable architecture
//!
//! Concrete implementations of the interface traits for use outside an IDE.

pub mod base_project_system;
pub mod physical_file_system;
pub mod standalone_host;

pub use base_project_system::BaseProjectSystem;
pub use physical_file_system::PhysicalFileSystem;
pub use standalone_host::StandaloneHost;
