use crate::ports::outbound::DocumentReader;
use crate::shared::error::EnrichError;
use crate::shared::Result;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// A raw SBOM document together with where it was loaded from
///
/// The parsed value keeps the original key order, so it can be written
/// back out unchanged inside the enriched record.
#[derive(Debug, Clone, PartialEq)]
pub struct SbomDocument {
    pub source: PathBuf,
    pub content: Value,
}

impl SbomDocument {
    pub fn new(source: PathBuf, content: Value) -> Self {
        Self { source, content }
    }

    /// Reads and parses an SBOM document through a DocumentReader
    ///
    /// # Errors
    /// Returns `FileReadError` from the reader, or `InvalidDocument` when
    /// the text is not JSON.
    pub fn load<R: DocumentReader + ?Sized>(reader: &R, path: &Path) -> Result<Self> {
        let text = reader.read_document(path)?;
        let content = serde_json::from_str(&text).map_err(|e| EnrichError::InvalidDocument {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;
        Ok(Self::new(path.to_path_buf(), content))
    }

    /// Short label for progress output
    pub fn label(&self) -> String {
        self.source
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.source.display().to_string())
    }
}
