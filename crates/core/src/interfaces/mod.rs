//! Capability interfaces
//!
//! The website adapter is composed from these traits instead of extending a
//! base project type: a file system rooted at the project, the host that
//! owns the project model, and the generic project system that combines the
//! two. Batch bracketing is its own capability.

pub mod batch_processor;
pub mod file_system;
pub mod host_project;
pub mod project_system;

pub use batch_processor::BatchProcessor;
pub use file_system::FileSystem;
pub use host_project::HostProject;
pub use project_system::ProjectSystem;
