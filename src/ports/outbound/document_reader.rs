use crate::shared::Result;
use std::path::Path;

/// DocumentReader port for loading input documents
///
/// Abstracts where scan requests and SBOM documents come from so that
/// use cases can be exercised without touching the file system.
pub trait DocumentReader {
    /// Reads the raw text of the document at `path`
    ///
    /// # Errors
    /// Returns an error if the document does not exist, is not a regular
    /// file, exceeds the size limit, or cannot be read.
    fn read_document(&self, path: &Path) -> Result<String>;
}
