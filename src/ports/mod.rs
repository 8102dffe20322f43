/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound ports (driven ports) describe everything the application core
/// needs from the file system and the console.
pub mod outbound;
