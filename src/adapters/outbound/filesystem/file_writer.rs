use crate::ports::outbound::OutputPresenter;
use crate::shared::error::LicenseListError;
use crate::shared::Result;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// FileSystemWriter adapter for writing output to files
///
/// This adapter implements the OutputPresenter port for file output.
/// Content is written to a temporary file in the destination directory and
/// then renamed over the output path, so readers never observe a partially
/// written file.
pub struct FileSystemWriter {
    output_path: PathBuf,
}

impl FileSystemWriter {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    fn write_error(&self, details: impl Into<String>) -> anyhow::Error {
        LicenseListError::OutputWriteFailed {
            path: self.output_path.clone(),
            details: details.into(),
        }
        .into()
    }

    /// Destination directory, treating a bare file name as the current directory
    fn destination_directory(&self) -> &Path {
        match self.output_path.parent() {
            Some(parent) if parent != Path::new("") => parent,
            _ => Path::new("."),
        }
    }

    /// Security validation before writing:
    /// - Reject if output path exists and is a symlink
    /// - Reject if output path is a directory
    fn validate_output_security(&self) -> Result<()> {
        let Ok(metadata) = fs::symlink_metadata(&self.output_path) else {
            return Ok(());
        };

        if metadata.is_symlink() {
            return Err(self.write_error(
                "Security: Output path is a symbolic link. For security reasons, writing to symbolic links is not allowed.",
            ));
        }
        if metadata.is_dir() {
            return Err(self.write_error("Output path is a directory"));
        }

        Ok(())
    }

    /// Ensures the destination directory exists, creating it recursively
    fn prepare_destination_directory(&self) -> Result<()> {
        let directory = self.destination_directory();
        fs::create_dir_all(directory).map_err(|e| {
            self.write_error(format!(
                "Failed to create directory {}: {}",
                directory.display(),
                e
            ))
        })
    }

    fn write_atomically(&self, content: &str) -> Result<()> {
        let mut temp_file = NamedTempFile::new_in(self.destination_directory())
            .map_err(|e| self.write_error(format!("Failed to create temporary file: {}", e)))?;

        temp_file
            .write_all(content.as_bytes())
            .and_then(|_| temp_file.as_file().sync_all())
            .map_err(|e| self.write_error(e.to_string()))?;

        // Temporary files are created owner-only; the list is meant to be bundled
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            temp_file
                .as_file()
                .set_permissions(fs::Permissions::from_mode(0o644))
                .map_err(|e| self.write_error(e.to_string()))?;
        }

        temp_file
            .persist(&self.output_path)
            .map_err(|e| self.write_error(e.error.to_string()))?;

        Ok(())
    }
}

impl OutputPresenter for FileSystemWriter {
    fn present(&self, content: &str) -> Result<()> {
        self.validate_output_security()?;
        self.prepare_destination_directory()?;
        self.write_atomically(content)
    }
}
