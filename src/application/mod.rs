/// Application layer - Use cases and DTOs
///
/// This layer contains the application logic that orchestrates
/// domain services and coordinates with infrastructure through ports.
pub mod build_command;
pub mod catalog;
pub mod dto;
pub mod invocation;
pub mod use_cases;

pub use build_command::BuildCommand;
pub use catalog::{CatalogEntry, LibraryCatalog};
pub use invocation::InvocationPlan;
