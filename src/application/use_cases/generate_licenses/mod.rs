use crate::application::dto::{LicenseRequest, LicenseResponse};
use crate::license_generation::domain::{
    DependencyReference, LibraryRecord, LicenseLookup, MissReason, MissingLicense,
};
use crate::license_generation::services::{CheckoutResolver, LibraryOrdering, LicenseFileMatcher};
use crate::ports::outbound::{CheckoutReader, ManifestReader, ProgressReporter};
use crate::shared::Result;
use std::path::Path;

/// GenerateLicensesUseCase - Core use case for license list generation
///
/// This use case orchestrates the license collection workflow using
/// generic dependency injection for all infrastructure dependencies.
///
/// # Type Parameters
/// * `MR` - ManifestReader implementation
/// * `CR` - CheckoutReader implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateLicensesUseCase<MR, CR, PR> {
    manifest_reader: MR,
    checkout_reader: CR,
    progress_reporter: PR,
}

impl<MR, CR, PR> GenerateLicensesUseCase<MR, CR, PR>
where
    MR: ManifestReader,
    CR: CheckoutReader,
    PR: ProgressReporter,
{
    /// Creates a new GenerateLicensesUseCase with injected dependencies
    pub fn new(manifest_reader: MR, checkout_reader: CR, progress_reporter: PR) -> Self {
        Self {
            manifest_reader,
            checkout_reader,
            progress_reporter,
        }
    }

    /// Executes the license generation use case
    ///
    /// # Arguments
    /// * `request` - Request naming the source packages directory and its layout
    ///
    /// # Returns
    /// LicenseResponse with the ordered records and the omitted dependencies
    ///
    /// # Errors
    /// Only a manifest failure aborts the run. A dependency without a
    /// readable license file is reported and left out of the response.
    pub fn execute(&self, request: LicenseRequest) -> Result<LicenseResponse> {
        // Step 1: Read and parse the manifest
        let dependencies = self.read_and_report_manifest(&request)?;

        // Step 2: Locate a license for every dependency
        let lookups = self.lookup_licenses(&dependencies, &request.checkouts_path());

        // Step 3: Build the ordered response
        Ok(self.build_response(lookups))
    }

    /// Reads the manifest, reporting progress
    fn read_and_report_manifest(&self, request: &LicenseRequest) -> Result<Vec<DependencyReference>> {
        self.progress_reporter.report(&format!(
            "🔍 Searching for licenses in: {}",
            request.source_root().display()
        ));

        let dependencies = self
            .manifest_reader
            .read_dependencies(&request.manifest_path())?;

        self.progress_reporter
            .report(&format!("✅ Detected {} dependency(ies)", dependencies.len()));

        Ok(dependencies)
    }

    /// Looks up licenses sequentially, reporting each outcome
    fn lookup_licenses(
        &self,
        dependencies: &[DependencyReference],
        checkouts_root: &Path,
    ) -> Vec<LicenseLookup> {
        let total = dependencies.len();

        dependencies
            .iter()
            .enumerate()
            .map(|(index, reference)| {
                let lookup = self.lookup_license(reference, checkouts_root);
                match &lookup {
                    LicenseLookup::Found(record) => {
                        self.progress_reporter
                            .report(&format!("✅ Found license for: {}", record.name()));
                    }
                    LicenseLookup::Missing(miss) => {
                        self.progress_reporter.report_error(&format!(
                            "⚠️  No license found for: {} ({})",
                            miss.name(),
                            miss.reason()
                        ));
                    }
                }
                self.progress_reporter
                    .report_progress(index + 1, total, Some(reference.name()));
                lookup
            })
            .collect()
    }

    /// Resolves the checkout of one dependency and reads its license file
    fn lookup_license(&self, reference: &DependencyReference, checkouts_root: &Path) -> LicenseLookup {
        let missing = |reason| LicenseLookup::Missing(MissingLicense::new(reference.name(), reason));

        let Some(checkout_dir) = CheckoutResolver::resolve(reference, checkouts_root) else {
            return missing(MissReason::UnresolvableLocation);
        };

        let Ok(entries) = self.checkout_reader.list_entries(&checkout_dir) else {
            return missing(MissReason::CheckoutMissing);
        };

        let Some(license_file) = LicenseFileMatcher::select(&entries) else {
            return missing(MissReason::NoLicenseFile);
        };

        match self
            .checkout_reader
            .read_text(&checkout_dir.join(license_file.file_name()))
        {
            Ok(body) if !body.trim().is_empty() => LicenseLookup::Found(LibraryRecord::new(
                reference.name(),
                reference.source_location(),
                body,
            )),
            _ => missing(MissReason::Unreadable),
        }
    }

    /// Partitions lookups and orders the found records for publication
    fn build_response(&self, lookups: Vec<LicenseLookup>) -> LicenseResponse {
        let (mut libraries, missing) = LicenseLookup::partition(lookups);
        LibraryOrdering::sort(&mut libraries);

        self.progress_reporter.report_completion(&format!(
            "📝 Collected {} license(s), {} dependency(ies) without license",
            libraries.len(),
            missing.len()
        ));

        LicenseResponse::new(libraries, missing)
    }
}
