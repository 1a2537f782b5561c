/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound ports (driven ports) describe what the application core needs
/// from the outside world: documents to read, a language source, and places
/// to send progress and results.
pub mod outbound;
