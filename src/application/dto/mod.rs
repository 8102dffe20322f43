/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod license_request;
mod license_response;

pub use license_request::LicenseRequest;
pub use license_response::LicenseResponse;
