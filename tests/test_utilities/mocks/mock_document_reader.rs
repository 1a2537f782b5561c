use std::collections::HashMap;
use std::path::{Path, PathBuf};
use sbom_enricher::prelude::*;

/// Mock DocumentReader serving documents from memory
#[derive(Default)]
pub struct MockDocumentReader {
    pub documents: HashMap<PathBuf, String>,
}

impl MockDocumentReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, path: &str, content: &str) -> Self {
        self.documents
            .insert(PathBuf::from(path), content.to_string());
        self
    }
}

impl DocumentReader for MockDocumentReader {
    fn read_document(&self, path: &Path) -> Result<String> {
        match self.documents.get(path) {
            Some(content) => Ok(content.clone()),
            None => Err(EnrichError::FileReadError {
                path: path.to_path_buf(),
                details: "File does not exist".to_string(),
            }
            .into()),
        }
    }
}
