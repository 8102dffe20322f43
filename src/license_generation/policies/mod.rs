mod license_file_priority;

pub use license_file_priority::LicenseFilePriority;
