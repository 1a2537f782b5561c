/// Use cases module containing application business logic orchestration
mod enrich_sbom;
mod validate_scan_request;

pub use enrich_sbom::EnrichSbomUseCase;
pub use validate_scan_request::ValidateScanRequestUseCase;
