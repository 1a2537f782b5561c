mod provenance_extractor;

pub use provenance_extractor::{find_property, ProvenanceExtractor};
