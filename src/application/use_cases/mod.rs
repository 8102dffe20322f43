/// Use cases module containing application business logic orchestration
mod generate_licenses;

pub use generate_licenses::GenerateLicensesUseCase;
