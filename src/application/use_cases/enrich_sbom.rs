use crate::application::dto::SbomDocument;
use crate::ports::outbound::{LanguageRepository, ProgressReporter};
use crate::sbom_enrichment::domain::{GitRepoRef, SbomInput};
use crate::sbom_enrichment::services::ProvenanceExtractor;
use crate::shared::Result;
use serde_json::Value;

/// EnrichSbomUseCase - Core use case for SBOM enrichment
///
/// Reads build provenance out of a raw SBOM, classifies the source
/// repository's languages through the LanguageRepository port and
/// assembles the enriched record.
///
/// # Type Parameters
/// * `LREPO` - LanguageRepository implementation
/// * `PR` - ProgressReporter implementation
pub struct EnrichSbomUseCase<LREPO, PR> {
    language_repository: LREPO,
    progress_reporter: PR,
}

impl<LREPO, PR> EnrichSbomUseCase<LREPO, PR>
where
    LREPO: LanguageRepository,
    PR: ProgressReporter,
{
    /// Creates a new EnrichSbomUseCase with injected dependencies
    pub fn new(language_repository: LREPO, progress_reporter: PR) -> Self {
        Self {
            language_repository,
            progress_reporter,
        }
    }

    /// Enriches a single raw SBOM document
    ///
    /// All extraction happens before the language lookup, so a malformed
    /// document never reaches the network. Failures are all-or-nothing.
    ///
    /// # Errors
    /// * `MalformedSbom` / `UnsupportedRepositoryUrl` from extraction
    /// * Any error from the LanguageRepository, unchanged
    pub fn enrich<'a>(&self, sbom: &'a Value) -> Result<SbomInput<'a>> {
        let provenance = ProvenanceExtractor::extract(sbom)?;

        self.progress_reporter.report(&format!(
            "🔍 Fetching languages for {} ({})",
            provenance.slug(),
            provenance.commit_id()
        ));

        let languages = self.language_repository.classify(provenance.slug())?;

        if languages.is_empty() {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: No supported languages detected in {}",
                provenance.slug()
            ));
        } else {
            let names: Vec<&str> = languages.iter().map(|l| l.as_str()).collect();
            self.progress_reporter
                .report(&format!("   - Languages: {}", names.join(", ")));
        }

        let git_repo = GitRepoRef::new(
            provenance.repository_url().to_string(),
            provenance.commit_id().to_string(),
            languages,
        );

        Ok(SbomInput::new(
            provenance.name().to_string(),
            provenance.tag().to_string(),
            git_repo,
            sbom,
        ))
    }

    /// Enriches a batch of documents in order, stopping at the first failure
    pub fn execute<'a>(&self, documents: &'a [SbomDocument]) -> Result<Vec<SbomInput<'a>>> {
        let total = documents.len();
        self.progress_reporter
            .report(&format!("📖 Enriching {} SBOM document(s)", total));

        let mut enriched = Vec::with_capacity(total);
        for (idx, document) in documents.iter().enumerate() {
            let label = document.label();
            self.progress_reporter
                .report_progress(idx + 1, total, Some(&label));

            let input = self.enrich(&document.content).map_err(|e| {
                self.progress_reporter
                    .report_error(&format!("❌ Failed to enrich {}", label));
                e
            })?;
            enriched.push(input);
        }

        self.progress_reporter
            .report_completion(&format!("✅ Enriched {} SBOM document(s)", enriched.len()));

        Ok(enriched)
    }
}
