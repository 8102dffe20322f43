//! license-list - third-party license list generator for Swift Package Manager projects
//!
//! This library reads the dependency resolution manifest of a source packages
//! directory, locates the license file of every resolved dependency checkout
//! and writes a deterministic JSON license list for display inside an app.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`license_generation`): Pure business logic and domain models
//! - **Application Layer** (`application`): Use cases, invocation planning and the runtime catalog
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use license_list::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! // Create use case with injected adapters
//! let use_case = GenerateLicensesUseCase::new(
//!     FileSystemReader::new(),
//!     FileSystemReader::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! // Execute
//! let request = LicenseRequest::new(
//!     PathBuf::from("SourcePackages"),
//!     SourcePackagesLayout::default(),
//! );
//! let response = use_case.execute(request)?;
//!
//! // Format and write output
//! let output = JsonFormatter::new().format(&response.libraries)?;
//! FileSystemWriter::new(PathBuf::from("licenses.json")).present(&output)?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod license_generation;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemReader, FileSystemWriter};
    pub use crate::adapters::outbound::formatters::JsonFormatter;
    pub use crate::adapters::outbound::resources::{AdjacentFileResource, BundledLicenses};
    pub use crate::application::dto::{LicenseRequest, LicenseResponse};
    pub use crate::application::use_cases::GenerateLicensesUseCase;
    pub use crate::application::{BuildCommand, CatalogEntry, InvocationPlan, LibraryCatalog};
    pub use crate::config::GeneratorSettings;
    pub use crate::license_generation::domain::{
        CheckoutEntry, DependencyReference, LibraryRecord, LicenseLookup, MissReason,
        MissingLicense, SourcePackagesLayout,
    };
    pub use crate::license_generation::services::{
        CheckoutResolver, LibraryOrdering, LicenseFileMatcher, ManifestParser,
    };
    pub use crate::ports::outbound::{
        CheckoutReader, LicenseListFormatter, LicenseResource, ManifestReader, OutputPresenter,
        ProgressReporter,
    };
    pub use crate::shared::Result;
}
