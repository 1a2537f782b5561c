//! Inbound scan request schema.
//!
//! A scan request names a container image, where its source lives, its SBOM
//! (either a full JSON document or a hand-declared package list) and the
//! vulnerabilities to investigate. Deserialization is strict: unknown fields,
//! missing fields, wrong types and unknown `_type` tags are all rejected.

use crate::shared::error::EnrichError;
use crate::shared::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScanRequest {
    pub image: Image,
    pub scan: Scan,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Image {
    pub name: String,
    pub tag: String,
    pub source_info: Vec<SourceInfo>,
    pub sbom_info: SbomInfo,
}

/// Where (part of) the image's source code comes from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceInfo {
    /// Source kind, e.g. `code` or `doc`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub source_type: Option<String>,
    pub git_repo: String,
    #[serde(rename = "ref")]
    pub reference: String,
    pub include: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Vec<String>>,
}

/// The image's SBOM, discriminated by the `_type` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "_type", rename_all = "lowercase", deny_unknown_fields)]
pub enum SbomInfo {
    /// A complete SBOM document, e.g. `format: "cyclonedx+json"`.
    Json {
        format: String,
        content: Map<String, Value>,
    },
    /// Packages declared by hand when no SBOM document is available.
    Manual { packages: Vec<SbomPackage> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SbomPackage {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scan {
    pub vulns: Vec<Vuln>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Vuln {
    pub vuln_id: String,
}

impl ScanRequest {
    /// Parses and validates a scan request from JSON text.
    ///
    /// # Errors
    /// Returns `EnrichError::SchemaValidation` for any structural violation
    /// or when `image.source_info` is empty.
    pub fn from_json(text: &str) -> Result<Self> {
        let request: ScanRequest =
            serde_json::from_str(text).map_err(|e| EnrichError::SchemaValidation {
                details: e.to_string(),
            })?;
        request.validate()?;
        Ok(request)
    }

    /// Checks the invariants serde cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.image.source_info.is_empty() {
            return Err(EnrichError::SchemaValidation {
                details: "image.source_info must contain at least one entry".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

impl SbomInfo {
    /// Serialized discriminator value of this variant.
    pub fn kind(&self) -> &'static str {
        match self {
            SbomInfo::Json { .. } => "json",
            SbomInfo::Manual { .. } => "manual",
        }
    }

    /// Number of packages described, when it can be known without parsing
    /// the embedded document.
    pub fn declared_package_count(&self) -> Option<usize> {
        match self {
            SbomInfo::Json { .. } => None,
            SbomInfo::Manual { packages } => Some(packages.len()),
        }
    }
}
