pub mod checkout_entry;
pub mod dependency_reference;
pub mod library_record;
pub mod license_lookup;
pub mod source_layout;

pub use checkout_entry::CheckoutEntry;
pub use dependency_reference::DependencyReference;
pub use library_record::LibraryRecord;
pub use license_lookup::{LicenseLookup, MissReason, MissingLicense};
pub use source_layout::SourcePackagesLayout;
