use super::LibraryRecord;
use std::fmt;

/// Why no license could be attached to a dependency
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissReason {
    /// The source location has no usable final path segment
    UnresolvableLocation,
    /// The checkout directory does not exist or cannot be listed
    CheckoutMissing,
    /// No top-level LICENSE/LICENCE file in the checkout
    NoLicenseFile,
    /// The selected license file is not readable UTF-8 text, or is blank
    Unreadable,
}

impl fmt::Display for MissReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissReason::UnresolvableLocation => write!(f, "source location has no repository name"),
            MissReason::CheckoutMissing => write!(f, "checkout directory not found"),
            MissReason::NoLicenseFile => write!(f, "no license file in checkout"),
            MissReason::Unreadable => write!(f, "license file could not be read"),
        }
    }
}

/// A dependency that was omitted from the license list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingLicense {
    name: String,
    reason: MissReason,
}

impl MissingLicense {
    pub fn new(name: impl Into<String>, reason: MissReason) -> Self {
        Self {
            name: name.into(),
            reason,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn reason(&self) -> MissReason {
        self.reason
    }
}

/// Outcome of looking up one dependency's license
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LicenseLookup {
    Found(LibraryRecord),
    Missing(MissingLicense),
}

impl LicenseLookup {
    /// Splits lookups into found records and misses, preserving encounter order
    pub fn partition(lookups: Vec<LicenseLookup>) -> (Vec<LibraryRecord>, Vec<MissingLicense>) {
        let mut found = Vec::new();
        let mut missing = Vec::new();
        for lookup in lookups {
            match lookup {
                LicenseLookup::Found(record) => found.push(record),
                LicenseLookup::Missing(miss) => missing.push(miss),
            }
        }
        (found, missing)
    }
}
