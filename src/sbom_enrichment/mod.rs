/// Domain layer: value objects, policies and pure services for SBOM enrichment
pub mod domain;
pub mod policies;
pub mod services;
