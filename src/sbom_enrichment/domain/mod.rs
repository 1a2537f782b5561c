pub mod language;
pub mod repository_slug;
pub mod sbom_input;
pub mod sbom_provenance;
pub mod scan_request;

pub use language::Language;
pub use repository_slug::RepositorySlug;
pub use sbom_input::{GitRepoRef, SbomInput};
pub use sbom_provenance::SbomProvenance;
pub use scan_request::{Image, SbomInfo, SbomPackage, Scan, ScanRequest, SourceInfo, Vuln};
