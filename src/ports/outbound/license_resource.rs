use crate::shared::Result;

/// LicenseResource port for locating a generated license list at runtime
///
/// Applications consume the generated file through one or more resources
/// tried in order (e.g. a bundled copy first, then a file next to the sources).
pub trait LicenseResource {
    /// Short description used in diagnostics
    fn describe(&self) -> String;

    /// Loads the raw license list JSON
    ///
    /// # Returns
    /// `Ok(None)` when the resource is absent
    ///
    /// # Errors
    /// Returns an error if the resource exists but cannot be read
    fn load(&self) -> Result<Option<String>>;
}
