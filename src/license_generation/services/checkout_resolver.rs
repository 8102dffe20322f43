use crate::license_generation::domain::DependencyReference;
use std::path::{Path, PathBuf};

/// CheckoutResolver service mapping a dependency to its checkout directory
///
/// The checkout directory is named after the last `/`-separated segment of
/// the source location, without a trailing `.git`.
pub struct CheckoutResolver;

impl CheckoutResolver {
    /// Derives the checkout directory name from a source location
    ///
    /// Returns `None` when the location ends in `/`, or when the segment is
    /// empty, `.`, `..` or just `.git` after stripping.
    pub fn checkout_name(source_location: &str) -> Option<&str> {
        let segment = source_location
            .rsplit('/')
            .next()
            .unwrap_or(source_location);
        let name = segment.strip_suffix(".git").unwrap_or(segment);

        match name {
            "" | "." | ".." => None,
            _ => Some(name),
        }
    }

    /// Resolves the expected checkout directory without checking that it exists
    pub fn resolve(reference: &DependencyReference, checkouts_root: &Path) -> Option<PathBuf> {
        Self::checkout_name(reference.source_location()).map(|name| checkouts_root.join(name))
    }
}
