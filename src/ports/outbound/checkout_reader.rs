use crate::license_generation::domain::CheckoutEntry;
use crate::shared::Result;
use std::path::Path;

/// CheckoutReader port for inspecting dependency checkouts
///
/// Failures of this port are never fatal for a run: the use case turns
/// them into a missing license for the affected dependency.
pub trait CheckoutReader {
    /// Lists the immediate entries of a checkout directory (non-recursive)
    ///
    /// # Errors
    /// Returns an error if the directory does not exist or cannot be listed
    fn list_entries(&self, checkout_dir: &Path) -> Result<Vec<CheckoutEntry>>;

    /// Reads a file in full as UTF-8 text
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not valid UTF-8
    fn read_text(&self, file_path: &Path) -> Result<String>;
}
