/// Shared utilities used across every layer
pub mod discovery;
pub mod error;
pub mod result;
pub mod security;

pub use discovery::find_marker_directory;
pub use result::Result;
