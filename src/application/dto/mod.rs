/// Data Transfer Objects for the application layer
mod sbom_document;

pub use sbom_document::SbomDocument;
