use crate::config::GeneratorSettings;
use crate::shared::error::LicenseListError;
use crate::shared::{find_marker_directory, Result};
use std::path::{Path, PathBuf};

/// Maximum number of positional paths: `[OUTPUT] [SOURCE_PACKAGES]`
pub const MAX_POSITIONAL_PATHS: usize = 2;

/// What a CLI invocation should do, derived from its positional paths
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvocationPlan {
    /// Generate the list from `source_root` into `output_path`
    Generate {
        output_path: PathBuf,
        source_root: PathBuf,
    },
    /// No source packages directory; write an empty list
    EmptyList { output_path: PathBuf },
}

impl InvocationPlan {
    /// Resolves the plan for `paths`
    ///
    /// * no path: `<project_root>/<output file>` from `<project_root>/<marker>`,
    ///   falling back to an empty list when that directory does not exist
    /// * one path: output path, source root discovered upward from `project_root`
    /// * two paths: output path and source root, used as given
    ///
    /// # Errors
    /// [`LicenseListError::InvalidArguments`] for more than two paths and
    /// [`LicenseListError::CheckoutRootNotFound`] when discovery fails.
    pub fn resolve(
        paths: &[PathBuf],
        project_root: &Path,
        settings: &GeneratorSettings,
    ) -> Result<Self> {
        match paths {
            [] => {
                let output_path = project_root.join(&settings.output_file_name);
                let source_root = project_root.join(&settings.marker_directory);
                if source_root.is_dir() {
                    Ok(Self::Generate {
                        output_path,
                        source_root,
                    })
                } else {
                    Ok(Self::EmptyList { output_path })
                }
            }
            [output_path] => {
                let source_root = find_marker_directory(project_root, &settings.marker_directory)?;
                Ok(Self::Generate {
                    output_path: output_path.clone(),
                    source_root,
                })
            }
            [output_path, source_root] => Ok(Self::Generate {
                output_path: output_path.clone(),
                source_root: source_root.clone(),
            }),
            _ => Err(LicenseListError::InvalidArguments { count: paths.len() }.into()),
        }
    }

    pub fn output_path(&self) -> &Path {
        match self {
            Self::Generate { output_path, .. } | Self::EmptyList { output_path } => output_path,
        }
    }
}
