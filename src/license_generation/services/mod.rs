mod checkout_resolver;
mod library_ordering;
mod license_file_matcher;
mod manifest_parser;

pub use checkout_resolver::CheckoutResolver;
pub use library_ordering::LibraryOrdering;
pub use license_file_matcher::LicenseFileMatcher;
pub use manifest_parser::ManifestParser;
