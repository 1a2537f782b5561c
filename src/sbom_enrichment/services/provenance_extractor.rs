use crate::sbom_enrichment::domain::{RepositorySlug, SbomProvenance};
use crate::shared::error::EnrichError;
use crate::shared::Result;
use serde_json::Value;

/// Syft label carrying the OpenShift build's source repository URL.
pub const SOURCE_LOCATION_PROPERTY: &str = "syft:image:labels:io.openshift.build.source-location";

/// Syft label carrying the URL of the commit the image was built from.
pub const COMMIT_URL_PROPERTY: &str = "syft:image:labels:io.openshift.build.commit.url";

/// ProvenanceExtractor service for reading component identity and build
/// provenance out of a syft-generated CycloneDX document.
///
/// Pure: no I/O, and the document is only read.
pub struct ProvenanceExtractor;

impl ProvenanceExtractor {
    /// Extracts name, version, repository URL, commit id and repository slug.
    ///
    /// # Errors
    /// * `MalformedSbom` when `metadata.component.name`,
    ///   `metadata.component.version` or `metadata.properties` is missing or
    ///   has the wrong type, when the component name is blank, or when
    ///   either build label is absent or unusable
    /// * `UnsupportedRepositoryUrl` when the source location is not a GitHub
    ///   clone URL
    pub fn extract(sbom: &Value) -> Result<SbomProvenance> {
        let name = require_str(sbom, &["metadata", "component", "name"])?;
        if name.trim().is_empty() {
            return Err(EnrichError::malformed("metadata.component.name", "value is blank").into());
        }
        let tag = require_str(sbom, &["metadata", "component", "version"])?;

        let properties = lookup(sbom, &["metadata", "properties"])?
            .as_array()
            .ok_or_else(|| EnrichError::malformed("metadata.properties", "expected an array"))?;

        let repository_url = find_property(properties, SOURCE_LOCATION_PROPERTY)
            .ok_or_else(|| missing_property(SOURCE_LOCATION_PROPERTY))?;
        let commit_url = find_property(properties, COMMIT_URL_PROPERTY)
            .ok_or_else(|| missing_property(COMMIT_URL_PROPERTY))?;

        let commit_id = Self::commit_id(commit_url)?;
        let slug = RepositorySlug::from_clone_url(repository_url)?;

        Ok(SbomProvenance::new(
            name.to_string(),
            tag.to_string(),
            repository_url.to_string(),
            commit_id.to_string(),
            slug,
        ))
    }

    /// Returns the final `/`-delimited segment of a commit URL.
    pub fn commit_id(commit_url: &str) -> Result<&str> {
        match commit_url.rsplit('/').next() {
            Some(id) if !id.is_empty() => Ok(id),
            _ => Err(EnrichError::malformed(
                format!("metadata.properties[{}]", COMMIT_URL_PROPERTY),
                format!("commit URL '{}' does not end with a commit id", commit_url),
            )
            .into()),
        }
    }
}

/// Linear lookup over a CycloneDX property list.
///
/// Property names may repeat; the first entry whose `name` matches wins,
/// even if its `value` is not a string. Returns `None` when no entry
/// matches or the winning entry has no string value.
pub fn find_property<'a>(properties: &'a [Value], name: &str) -> Option<&'a str> {
    properties
        .iter()
        .find(|prop| prop.get("name").and_then(Value::as_str) == Some(name))
        .and_then(|prop| prop.get("value"))
        .and_then(Value::as_str)
}

fn lookup<'a>(document: &'a Value, path: &[&str]) -> Result<&'a Value> {
    let mut current = document;
    for (depth, key) in path.iter().enumerate() {
        current = current
            .get(key)
            .ok_or_else(|| EnrichError::malformed(path[..=depth].join("."), "key not found"))?;
    }
    Ok(current)
}

fn require_str<'a>(document: &'a Value, path: &[&str]) -> Result<&'a str> {
    lookup(document, path)?.as_str().ok_or_else(|| {
        EnrichError::malformed(path.join("."), "expected a string value").into()
    })
}

fn missing_property(name: &str) -> anyhow::Error {
    EnrichError::malformed(
        format!("metadata.properties[{}]", name),
        "property not found or has no string value",
    )
    .into()
}
