use crate::ports::outbound::LicenseResource;
use crate::shared::security::{validate_file_size, MAX_FILE_SIZE};
use crate::shared::Result;
use anyhow::Context;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

const DEFAULT_FILE_NAME: &str = "licenses.json";

/// AdjacentFileResource adapter for a license list stored next to the sources
///
/// Used during development, when the list has been generated into the
/// source tree but not bundled yet.
pub struct AdjacentFileResource {
    path: PathBuf,
}

impl AdjacentFileResource {
    /// `licenses.json` inside `directory`
    pub fn in_directory(directory: &Path) -> Self {
        Self {
            path: directory.join(DEFAULT_FILE_NAME),
        }
    }

    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }
}

impl LicenseResource for AdjacentFileResource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<Option<String>> {
        let metadata = match fs::metadata(&self.path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read {}", self.path.display()))
            }
        };
        validate_file_size(metadata.len(), &self.path, MAX_FILE_SIZE)?;

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        Ok(Some(content))
    }
}
