use crate::license_generation::domain::SourcePackagesLayout;
use std::path::{Path, PathBuf};

/// LicenseRequest - Internal request DTO for the license generation use case
#[derive(Debug, Clone)]
pub struct LicenseRequest {
    /// Directory holding the manifest and the checkouts directory
    pub source_root: PathBuf,
    /// Names of the manifest and checkouts directory inside `source_root`
    pub layout: SourcePackagesLayout,
}

impl LicenseRequest {
    pub fn new(source_root: PathBuf, layout: SourcePackagesLayout) -> Self {
        Self {
            source_root,
            layout,
        }
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.layout.manifest_path(&self.source_root)
    }

    pub fn checkouts_path(&self) -> PathBuf {
        self.layout.checkouts_path(&self.source_root)
    }

    pub fn source_root(&self) -> &Path {
        &self.source_root
    }
}
