pub mod package;

pub use package::PackageContents;
