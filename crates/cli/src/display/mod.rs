pub mod formatter;

pub use formatter::{format_placement, format_removal, print_placement};
