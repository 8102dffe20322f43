use std::path::{Path, PathBuf};

pub const DEFAULT_MANIFEST_FILE_NAME: &str = "workspace-state.json";
pub const DEFAULT_CHECKOUTS_DIRECTORY: &str = "checkouts";

/// Names of the entries inside a source packages directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePackagesLayout {
    manifest_file_name: String,
    checkouts_directory: String,
}

impl SourcePackagesLayout {
    pub fn new(manifest_file_name: impl Into<String>, checkouts_directory: impl Into<String>) -> Self {
        Self {
            manifest_file_name: manifest_file_name.into(),
            checkouts_directory: checkouts_directory.into(),
        }
    }

    pub fn manifest_path(&self, source_root: &Path) -> PathBuf {
        source_root.join(&self.manifest_file_name)
    }

    pub fn checkouts_path(&self, source_root: &Path) -> PathBuf {
        source_root.join(&self.checkouts_directory)
    }
}

impl Default for SourcePackagesLayout {
    fn default() -> Self {
        Self::new(DEFAULT_MANIFEST_FILE_NAME, DEFAULT_CHECKOUTS_DIRECTORY)
    }
}
