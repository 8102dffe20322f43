use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Build tools only distinguish success from failure, so every fatal
/// condition maps to the same non-zero code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// The license list was written (possibly empty)
    Success = 0,
    /// Manifest unreadable, output unwritable, discovery failure or bad arguments
    Failure = 1,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::Failure => write!(f, "Failure (1)"),
        }
    }
}

/// Run-fatal errors of license list generation.
///
/// A dependency without a license file is not an error; it is reported as
/// [`crate::license_generation::domain::LicenseLookup::Missing`] instead.
#[derive(Debug, Error)]
pub enum LicenseListError {
    #[error("Could not read manifest: {path}\nDetails: {details}\n\n💡 Hint: Resolve the package dependencies first so that the manifest exists and is valid JSON")]
    ManifestUnreadable { path: PathBuf, details: String },

    #[error("Could not write license list: {path}\nDetails: {details}\n\n💡 Hint: Please verify that you have write permissions for the destination directory")]
    OutputWriteFailed { path: PathBuf, details: String },

    #[error("{marker} directory not found above {start}\n\n💡 Hint: Pass the {marker} path explicitly as the second argument")]
    CheckoutRootNotFound { start: PathBuf, marker: String },

    #[error("Expected at most 2 arguments, got {count}")]
    InvalidArguments { count: usize },

    /// Rejected configuration value
    #[error("Invalid config: {field} {reason}")]
    InvalidConfig { field: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::Failure.as_i32(), 1);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(format!("{}", ExitCode::Failure), "Failure (1)");
    }

    #[test]
    fn test_manifest_unreadable_display() {
        let error = LicenseListError::ManifestUnreadable {
            path: PathBuf::from("/build/SourcePackages/workspace-state.json"),
            details: "missing field `packageRef`".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Could not read manifest"));
        assert!(display.contains("workspace-state.json"));
        assert!(display.contains("missing field `packageRef`"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_output_write_failed_display() {
        let error = LicenseListError::OutputWriteFailed {
            path: PathBuf::from("/readonly/licenses.json"),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Could not write license list"));
        assert!(display.contains("/readonly/licenses.json"));
        assert!(display.contains("Permission denied"));
    }

    #[test]
    fn test_checkout_root_not_found_display() {
        let error = LicenseListError::CheckoutRootNotFound {
            start: PathBuf::from("/work/app"),
            marker: "SourcePackages".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.starts_with("SourcePackages directory not found above /work/app"));
        assert!(display.contains("second argument"));
    }

    #[test]
    fn test_invalid_arguments_display() {
        let error = LicenseListError::InvalidArguments { count: 3 };
        assert_eq!(format!("{}", error), "Expected at most 2 arguments, got 3");
    }

    #[test]
    fn test_invalid_config_display() {
        let error = LicenseListError::InvalidConfig {
            field: "marker_directory".to_string(),
            reason: "must not be empty".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "Invalid config: marker_directory must not be empty"
        );
    }
}
