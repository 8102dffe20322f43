use crate::shared::error::LicenseListError;
use std::path::{Path, PathBuf};

/// Walks upward from `start` looking for a child directory named `marker`.
///
/// `start` itself is checked first, then each parent up to and including the
/// filesystem root. Relative starting paths are anchored at the current
/// working directory. Both the CLI and the build command planner go through
/// this function.
///
/// # Errors
/// Returns [`LicenseListError::CheckoutRootNotFound`] when no ancestor
/// contains the marker directory.
pub fn find_marker_directory(start: &Path, marker: &str) -> Result<PathBuf, LicenseListError> {
    let start = absolutize(start);

    start
        .ancestors()
        .map(|dir| dir.join(marker))
        .find(|candidate| candidate.is_dir())
        .ok_or_else(|| LicenseListError::CheckoutRootNotFound {
            start: start.clone(),
            marker: marker.to_string(),
        })
}

fn absolutize(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    match std::env::current_dir() {
        Ok(cwd) => cwd.join(path),
        Err(_) => path.to_path_buf(),
    }
}
