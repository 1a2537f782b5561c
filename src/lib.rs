//! sbom-enricher - prepare container image SBOMs for vulnerability scanning
//!
//! This library validates scan requests and enriches syft-generated
//! CycloneDX SBOMs with the source repository they were built from: the
//! commit id and the supported programming languages GitHub reports for it.
//!
//! # Architecture
//!
//! - **Domain Layer** (`sbom_enrichment`): value objects, the supported
//!   language policy and the pure provenance extractor
//! - **Application Layer** (`application`): use cases orchestrating the domain
//! - **Ports** (`ports`): interfaces for infrastructure
//! - **Adapters** (`adapters`): GitHub client, file system, console
//! - **Shared** (`shared`): error types and file safety checks
//!
//! # Example
//!
//! ```no_run
//! use sbom_enricher::prelude::*;
//! use std::path::Path;
//!
//! # fn main() -> Result<()> {
//! let reader = FileSystemReader::new();
//! let document = SbomDocument::load(&reader, Path::new("sbom.json"))?;
//!
//! let use_case = EnrichSbomUseCase::new(
//!     GitHubLanguageRepository::new()?,
//!     StderrProgressReporter::new(),
//! );
//! let input = use_case.enrich(&document.content)?;
//! println!("{}", serde_json::to_string_pretty(&input)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
pub mod sbom_enrichment;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{QuietProgressReporter, StderrProgressReporter};
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::network::GitHubLanguageRepository;
    pub use crate::application::dto::SbomDocument;
    pub use crate::application::use_cases::{EnrichSbomUseCase, ValidateScanRequestUseCase};
    pub use crate::ports::outbound::{
        DocumentReader, LanguageRepository, OutputPresenter, ProgressReporter,
    };
    pub use crate::sbom_enrichment::domain::{
        GitRepoRef, Image, Language, RepositorySlug, SbomInfo, SbomInput, SbomPackage,
        SbomProvenance, Scan, ScanRequest, SourceInfo, Vuln,
    };
    pub use crate::sbom_enrichment::policies::SupportedLanguages;
    pub use crate::sbom_enrichment::services::{find_property, ProvenanceExtractor};
    pub use crate::shared::error::{EnrichError, ExitCode};
    pub use crate::shared::Result;
}
