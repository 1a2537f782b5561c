use crate::sbom_enrichment::domain::{Language, RepositorySlug};
use crate::sbom_enrichment::policies::SupportedLanguages;
use crate::shared::Result;

/// LanguageRepository port for looking up a repository's languages
///
/// This port abstracts the hosting provider's language-statistics API
/// (GitHub's `/repos/{owner}/{repo}/languages`). Calls are synchronous
/// and each one is a fresh lookup.
pub trait LanguageRepository {
    /// Fetches the language names reported for a repository
    ///
    /// # Returns
    /// Language names in the order the provider listed them. Byte counts
    /// are not part of the contract.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The provider answers with a non-success status (`ExternalService`)
    /// - The request cannot be sent (transport error, passed through as-is)
    /// - The response body is not a JSON object
    fn fetch_languages(&self, slug: &RepositorySlug) -> Result<Vec<String>>;

    /// Classifies a repository into the supported languages
    ///
    /// Convenience method that fetches the raw breakdown and applies the
    /// [`SupportedLanguages`] policy.
    fn classify(&self, slug: &RepositorySlug) -> Result<Vec<Language>> {
        let reported = self.fetch_languages(slug)?;
        Ok(SupportedLanguages::filter(reported.iter().map(String::as_str)))
    }
}
