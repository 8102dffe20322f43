use crate::config::GeneratorSettings;
use crate::shared::error::LicenseListError;
use crate::shared::find_marker_directory;
use std::path::{Path, PathBuf};
use std::process::Command;

pub const BUILD_COMMAND_DISPLAY_NAME: &str = "Prepare LicenseList";

/// A pre-build command that regenerates the license list
///
/// The arguments are exactly the two-path CLI form
/// `[output path, source packages path]`, so running the command needs no
/// discovery of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildCommand {
    pub display_name: String,
    pub executable: PathBuf,
    pub arguments: Vec<PathBuf>,
    pub output_files: Vec<PathBuf>,
}

impl BuildCommand {
    /// Plans the command for a build running in `work_dir`
    ///
    /// The list is written to `<work_dir>/<output file>`. The source packages
    /// directory is found by walking upward from `work_dir`.
    ///
    /// # Errors
    /// Returns [`LicenseListError::CheckoutRootNotFound`] if no ancestor of
    /// `work_dir` holds the marker directory.
    pub fn prepare(
        work_dir: &Path,
        executable: &Path,
        settings: &GeneratorSettings,
    ) -> Result<Self, LicenseListError> {
        let source_root = find_marker_directory(work_dir, &settings.marker_directory)?;
        let output = work_dir.join(&settings.output_file_name);

        Ok(Self {
            display_name: BUILD_COMMAND_DISPLAY_NAME.to_string(),
            executable: executable.to_path_buf(),
            arguments: vec![output.clone(), source_root],
            output_files: vec![output],
        })
    }

    pub fn to_command(&self) -> Command {
        let mut command = Command::new(&self.executable);
        command.args(&self.arguments);
        command
    }
}
