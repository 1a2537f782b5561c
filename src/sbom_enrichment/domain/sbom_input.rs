use super::Language;
use serde::Serialize;
use serde_json::Value;

/// Source repository reference derived from an SBOM's build labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GitRepoRef {
    /// Repository URL exactly as found in the SBOM.
    pub name: String,
    /// Commit the image was built from.
    #[serde(rename = "ref")]
    pub reference: String,
    /// Supported languages detected in the repository, in the order the
    /// hosting API reported them. Compare as a set.
    pub languages: Vec<Language>,
}

impl GitRepoRef {
    pub fn new(name: String, reference: String, languages: Vec<Language>) -> Self {
        Self {
            name,
            reference,
            languages,
        }
    }
}

/// Enriched SBOM record handed to the downstream scanner.
///
/// Borrows the raw SBOM document; serializing the record writes the
/// document back out unchanged.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SbomInput<'a> {
    pub name: String,
    pub tag: String,
    pub git_repo: GitRepoRef,
    pub sbom: &'a Value,
}

impl<'a> SbomInput<'a> {
    pub fn new(name: String, tag: String, git_repo: GitRepoRef, sbom: &'a Value) -> Self {
        Self {
            name,
            tag,
            git_repo,
            sbom,
        }
    }
}
