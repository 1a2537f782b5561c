use crate::ports::outbound::DocumentReader;
use crate::shared::error::EnrichError;
use crate::shared::security::{inspect_input_file, MAX_DOCUMENT_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for reading input documents from disk
///
/// Implements the DocumentReader port. Symlinks, non-regular files and
/// files above the size cap are refused before anything is read.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentReader for FileSystemReader {
    fn read_document(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(EnrichError::FileReadError {
                path: path.to_path_buf(),
                details: "File does not exist".to_string(),
            }
            .into());
        }

        inspect_input_file(path, MAX_DOCUMENT_SIZE).map_err(|e| EnrichError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        fs::read_to_string(path).map_err(|e| {
            EnrichError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
