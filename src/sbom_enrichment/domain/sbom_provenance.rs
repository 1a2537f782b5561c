use super::RepositorySlug;

/// Component identity and build provenance read from an SBOM.
///
/// Produced by [`ProvenanceExtractor`](crate::sbom_enrichment::services::ProvenanceExtractor)
/// before any network access happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SbomProvenance {
    name: String,
    tag: String,
    repository_url: String,
    commit_id: String,
    slug: RepositorySlug,
}

impl SbomProvenance {
    pub fn new(
        name: String,
        tag: String,
        repository_url: String,
        commit_id: String,
        slug: RepositorySlug,
    ) -> Self {
        Self {
            name,
            tag,
            repository_url,
            commit_id,
            slug,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn repository_url(&self) -> &str {
        &self.repository_url
    }

    pub fn commit_id(&self) -> &str {
        &self.commit_id
    }

    pub fn slug(&self) -> &RepositorySlug {
        &self.slug
    }
}
