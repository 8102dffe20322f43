/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, console, bundled resources).
pub mod checkout_reader;
pub mod formatter;
pub mod license_resource;
pub mod manifest_reader;
pub mod output_presenter;
pub mod progress_reporter;

pub use checkout_reader::CheckoutReader;
pub use formatter::LicenseListFormatter;
pub use license_resource::LicenseResource;
pub use manifest_reader::ManifestReader;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
