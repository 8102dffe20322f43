use crate::license_generation::domain::LibraryRecord;
use crate::shared::Result;

/// LicenseListFormatter port for serializing the license list
pub trait LicenseListFormatter {
    /// Formats already-ordered records
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, libraries: &[LibraryRecord]) -> Result<String>;
}
