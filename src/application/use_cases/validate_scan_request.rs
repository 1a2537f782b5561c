use crate::ports::outbound::{DocumentReader, ProgressReporter};
use crate::sbom_enrichment::domain::ScanRequest;
use crate::shared::Result;
use std::path::Path;

/// ValidateScanRequestUseCase - loads a scan request and checks its shape
///
/// Validation fails closed: nothing is returned unless the whole request
/// conforms to the schema.
pub struct ValidateScanRequestUseCase<DR, PR> {
    document_reader: DR,
    progress_reporter: PR,
}

impl<DR, PR> ValidateScanRequestUseCase<DR, PR>
where
    DR: DocumentReader,
    PR: ProgressReporter,
{
    pub fn new(document_reader: DR, progress_reporter: PR) -> Self {
        Self {
            document_reader,
            progress_reporter,
        }
    }

    /// Reads the request at `path` and validates it
    ///
    /// # Errors
    /// * `FileReadError` if the file cannot be read
    /// * `SchemaValidation` for any schema violation
    pub fn execute(&self, path: &Path) -> Result<ScanRequest> {
        self.progress_reporter
            .report(&format!("📖 Loading scan request from: {}", path.display()));

        let text = self.document_reader.read_document(path)?;
        let request = ScanRequest::from_json(&text)?;

        let image = &request.image;
        self.progress_reporter.report(&format!(
            "   - Image: {}:{}",
            image.name, image.tag
        ));
        self.progress_reporter.report(&format!(
            "   - Source repositories: {}",
            image.source_info.len()
        ));
        let sbom_summary = match image.sbom_info.declared_package_count() {
            Some(count) => format!("{} ({} package(s))", image.sbom_info.kind(), count),
            None => image.sbom_info.kind().to_string(),
        };
        self.progress_reporter
            .report(&format!("   - SBOM: {}", sbom_summary));
        self.progress_reporter.report(&format!(
            "   - Vulnerabilities: {}",
            request.scan.vulns.len()
        ));
        self.progress_reporter
            .report_completion("✅ Scan request is valid");

        Ok(request)
    }
}
