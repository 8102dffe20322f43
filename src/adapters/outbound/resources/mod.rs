/// Resource adapters locating a generated license list at runtime
mod adjacent_file;
mod bundled;

pub use adjacent_file::AdjacentFileResource;
pub use bundled::BundledLicenses;
