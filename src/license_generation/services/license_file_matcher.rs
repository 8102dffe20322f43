use crate::license_generation::domain::CheckoutEntry;
use crate::license_generation::policies::LicenseFilePriority;
use std::path::Path;

/// Accepted file stems, compared case-insensitively
const LICENSE_FILE_STEMS: [&str; 2] = ["license", "licence"];

/// LicenseFileMatcher service for recognizing license files in a checkout
pub struct LicenseFileMatcher;

impl LicenseFileMatcher {
    /// Returns true when the file name, minus its last extension, is
    /// `license` or `licence` in any case
    pub fn is_license_file_name(file_name: &str) -> bool {
        Path::new(file_name)
            .file_stem()
            .and_then(|stem| stem.to_str())
            .map(|stem| {
                let folded = stem.to_lowercase();
                LICENSE_FILE_STEMS.contains(&folded.as_str())
            })
            .unwrap_or(false)
    }

    /// Selects the license file among the immediate entries of a checkout
    ///
    /// Directories are never selected, even when their name matches.
    /// Ties are settled by [`LicenseFilePriority`].
    pub fn select(entries: &[CheckoutEntry]) -> Option<&CheckoutEntry> {
        LicenseFilePriority::select(
            entries
                .iter()
                .filter(|entry| !entry.is_directory())
                .filter(|entry| Self::is_license_file_name(entry.file_name())),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_common_license_names() {
        for name in [
            "LICENSE",
            "LICENSE.txt",
            "license.md",
            "LICENCE",
            "Licence.rtf",
            "License",
        ] {
            assert!(
                LicenseFileMatcher::is_license_file_name(name),
                "{name} should match"
            );
        }
    }

    #[test]
    fn test_rejects_other_names() {
        for name in [
            "README.md",
            "LICENSE-MIT",
            "LICENSES",
            "COPYING",
            "LICENSE.md.txt",
            ".license",
            "",
        ] {
            assert!(
                !LicenseFileMatcher::is_license_file_name(name),
                "{name} should not match"
            );
        }
    }

    #[test]
    fn test_select_skips_directories() {
        let entries = vec![
            CheckoutEntry::directory("LICENSE"),
            CheckoutEntry::file("Package.swift"),
        ];
        assert!(LicenseFileMatcher::select(&entries).is_none());
    }

    #[test]
    fn test_select_finds_file_next_to_matching_directory() {
        let entries = vec![
            CheckoutEntry::directory("LICENSE"),
            CheckoutEntry::file("LICENSE.txt"),
            CheckoutEntry::file("README.md"),
        ];
        let chosen = LicenseFileMatcher::select(&entries).unwrap();
        assert_eq!(chosen.file_name(), "LICENSE.txt");
    }

    #[test]
    fn test_select_applies_priority() {
        let entries = vec![
            CheckoutEntry::file("LICENSE.md"),
            CheckoutEntry::file("Sources"),
            CheckoutEntry::file("LICENSE"),
        ];
        let chosen = LicenseFileMatcher::select(&entries).unwrap();
        assert_eq!(chosen.file_name(), "LICENSE");
    }

    #[test]
    fn test_select_empty_listing() {
        assert!(LicenseFileMatcher::select(&[]).is_none());
    }
}
