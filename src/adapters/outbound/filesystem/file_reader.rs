use crate::license_generation::domain::CheckoutEntry;
use crate::ports::outbound::{CheckoutReader, ManifestReader};
use crate::shared::error::LicenseListError;
use crate::shared::security::{validate_file_size, validate_regular_file, MAX_FILE_SIZE};
use crate::shared::Result;
use anyhow::Context;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for reading files from the file system
///
/// This adapter implements both ManifestReader and CheckoutReader ports,
/// providing file system access for the manifest and dependency checkouts.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystemReader {
    /// Safely read a file with security checks:
    /// - Reject symbolic links
    /// - Validate file is a regular file
    /// - Check file size limits
    fn safe_read_file(&self, path: &Path, file_type: &str) -> Result<String> {
        validate_regular_file(path, file_type)?;

        let metadata = fs::metadata(path)
            .with_context(|| format!("Failed to read {} metadata", file_type))?;
        validate_file_size(metadata.len(), path, MAX_FILE_SIZE)?;

        fs::read_to_string(path).with_context(|| format!("Failed to read {}", file_type))
    }
}

impl ManifestReader for FileSystemReader {
    fn read_manifest(&self, manifest_path: &Path) -> Result<String> {
        if !manifest_path.exists() {
            return Err(LicenseListError::ManifestUnreadable {
                path: manifest_path.to_path_buf(),
                details: "File does not exist".to_string(),
            }
            .into());
        }

        let file_type = manifest_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "manifest".to_string());

        self.safe_read_file(manifest_path, &file_type).map_err(|e| {
            LicenseListError::ManifestUnreadable {
                path: manifest_path.to_path_buf(),
                details: format!("{:#}", e),
            }
            .into()
        })
    }
}

impl CheckoutReader for FileSystemReader {
    fn list_entries(&self, checkout_dir: &Path) -> Result<Vec<CheckoutEntry>> {
        let read_dir = fs::read_dir(checkout_dir)
            .with_context(|| format!("Failed to list {}", checkout_dir.display()))?;

        let mut entries = Vec::new();
        for entry in read_dir {
            let entry = entry
                .with_context(|| format!("Failed to list {}", checkout_dir.display()))?;

            // Names that are not UTF-8 can never match a license file name
            let Ok(file_name) = entry.file_name().into_string() else {
                continue;
            };

            // Follows symlinks, so a link to a directory counts as a directory
            let is_directory = fs::metadata(entry.path())
                .map(|metadata| metadata.is_dir())
                .unwrap_or(false);

            entries.push(if is_directory {
                CheckoutEntry::directory(file_name)
            } else {
                CheckoutEntry::file(file_name)
            });
        }

        Ok(entries)
    }

    fn read_text(&self, file_path: &Path) -> Result<String> {
        let metadata = fs::metadata(file_path)
            .with_context(|| format!("Failed to read metadata of {}", file_path.display()))?;
        validate_file_size(metadata.len(), file_path, MAX_FILE_SIZE)?;

        fs::read_to_string(file_path)
            .with_context(|| format!("Failed to read {}", file_path.display()))
    }
}
