use crate::license_generation::domain::DependencyReference;
use crate::license_generation::services::ManifestParser;
use crate::shared::error::LicenseListError;
use crate::shared::Result;
use std::path::Path;

/// ManifestReader port for reading the dependency resolution manifest
///
/// This port abstracts the file system operations needed to read
/// the manifest (e.g. `workspace-state.json`) from a source packages directory.
pub trait ManifestReader {
    /// Reads the raw manifest content
    ///
    /// # Errors
    /// Returns [`LicenseListError::ManifestUnreadable`] if the file does not
    /// exist or cannot be read
    fn read_manifest(&self, manifest_path: &Path) -> Result<String>;

    /// Reads and parses the manifest into dependency references
    ///
    /// # Errors
    /// Returns [`LicenseListError::ManifestUnreadable`] if reading fails or
    /// if any dependency entry lacks a name or location
    fn read_dependencies(&self, manifest_path: &Path) -> Result<Vec<DependencyReference>> {
        let content = self.read_manifest(manifest_path)?;

        ManifestParser::parse(&content).map_err(|e| {
            LicenseListError::ManifestUnreadable {
                path: manifest_path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
