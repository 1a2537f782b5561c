use crate::sbom_enrichment::domain::Language;

/// SupportedLanguages policy for narrowing a repository's language breakdown
/// to the languages the scanner can analyze.
///
/// Rules:
/// 1. A reported name is kept only if it exactly matches a [`Language`].
/// 2. Reported order is preserved.
/// 3. A language appears at most once.
pub struct SupportedLanguages;

impl SupportedLanguages {
    /// Filters reported language names down to the supported set.
    ///
    /// # Arguments
    /// * `reported` - Language names in the order the hosting API listed them
    pub fn filter<'a, I>(reported: I) -> Vec<Language>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut languages = Vec::new();
        for language in reported.into_iter().filter_map(Language::from_github_name) {
            if !languages.contains(&language) {
                languages.push(language);
            }
        }
        languages
    }
}
