use crate::license_generation::domain::CheckoutEntry;
use std::path::Path;

/// LicenseFilePriority policy for choosing between several license files
///
/// Directory listing order differs between platforms, so the choice is made
/// from the names alone.
///
/// Priority order:
/// 1. A file without extension (`LICENSE`, `LICENCE`)
/// 2. Otherwise the smallest file name in byte order (`LICENSE.md` before `LICENSE.txt`)
pub struct LicenseFilePriority;

impl LicenseFilePriority {
    /// Picks the preferred entry among license file candidates
    ///
    /// # Returns
    /// The chosen candidate, or None when `candidates` is empty
    pub fn select<'a, I>(candidates: I) -> Option<&'a CheckoutEntry>
    where
        I: IntoIterator<Item = &'a CheckoutEntry>,
    {
        candidates
            .into_iter()
            .min_by(|a, b| Self::sort_key(a).cmp(&Self::sort_key(b)))
    }

    fn sort_key(entry: &CheckoutEntry) -> (bool, &str) {
        let has_extension = Path::new(entry.file_name()).extension().is_some();
        (has_extension, entry.file_name())
    }
}
