use crate::license_generation::domain::{LibraryRecord, MissingLicense};

/// LicenseResponse - Internal response DTO from the license generation use case
#[derive(Debug, Clone)]
pub struct LicenseResponse {
    /// Records in publication order (case-insensitive by name)
    pub libraries: Vec<LibraryRecord>,
    /// Dependencies omitted because no license could be located, in manifest order
    pub missing: Vec<MissingLicense>,
}

impl LicenseResponse {
    pub fn new(libraries: Vec<LibraryRecord>, missing: Vec<MissingLicense>) -> Self {
        Self { libraries, missing }
    }

    /// Number of dependencies listed in the manifest
    pub fn dependency_count(&self) -> usize {
        self.libraries.len() + self.missing.len()
    }
}
