//! Configuration file support for license-list.
//!
//! Provides YAML-based configuration through `license-list.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::license_generation::domain::source_layout::{
    DEFAULT_CHECKOUTS_DIRECTORY, DEFAULT_MANIFEST_FILE_NAME,
};
use crate::license_generation::domain::SourcePackagesLayout;
use crate::shared::error::LicenseListError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "license-list.config.yml";

/// Environment variable naming the project root (set by Xcode build phases)
pub const PROJECT_ROOT_ENV: &str = "SRCROOT";

pub const DEFAULT_OUTPUT_FILE_NAME: &str = "licenses.json";
pub const DEFAULT_MARKER_DIRECTORY: &str = "SourcePackages";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub output_file_name: Option<String>,
    pub marker_directory: Option<String>,
    pub manifest_file_name: Option<String>,
    pub checkouts_directory: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Effective settings after applying defaults to an optional config file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorSettings {
    pub output_file_name: String,
    pub marker_directory: String,
    pub layout: SourcePackagesLayout,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self::from_config(ConfigFile::default())
    }
}

impl GeneratorSettings {
    pub fn from_config(config: ConfigFile) -> Self {
        Self {
            output_file_name: config
                .output_file_name
                .unwrap_or_else(|| DEFAULT_OUTPUT_FILE_NAME.to_string()),
            marker_directory: config
                .marker_directory
                .unwrap_or_else(|| DEFAULT_MARKER_DIRECTORY.to_string()),
            layout: SourcePackagesLayout::new(
                config
                    .manifest_file_name
                    .unwrap_or_else(|| DEFAULT_MANIFEST_FILE_NAME.to_string()),
                config
                    .checkouts_directory
                    .unwrap_or_else(|| DEFAULT_CHECKOUTS_DIRECTORY.to_string()),
            ),
        }
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
///
/// Every configured value names a single directory entry, so it must be
/// non-empty and free of path separators.
fn validate_config(config: &ConfigFile) -> Result<()> {
    let fields = [
        ("output_file_name", &config.output_file_name),
        ("marker_directory", &config.marker_directory),
        ("manifest_file_name", &config.manifest_file_name),
        ("checkouts_directory", &config.checkouts_directory),
    ];

    for (field, value) in fields {
        let Some(value) = value else {
            continue;
        };
        if value.trim().is_empty() {
            return Err(invalid(field, "must not be empty"));
        }
        if value.contains('/') || value.contains('\\') {
            return Err(invalid(field, "must be a single file or directory name"));
        }
        if value == "." || value == ".." {
            return Err(invalid(field, "must not refer to the current or parent directory"));
        }
    }
    Ok(())
}

fn invalid(field: &str, reason: &str) -> anyhow::Error {
    LicenseListError::InvalidConfig {
        field: field.to_string(),
        reason: reason.to_string(),
    }
    .into()
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
