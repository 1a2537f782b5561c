use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use sbom_enricher::prelude::*;

/// Mock LanguageRepository for testing
///
/// Returns canned language breakdowns per slug and counts lookups so tests
/// can assert that no request was made.
pub struct MockLanguageRepository {
    pub languages: HashMap<String, Vec<String>>,
    pub failure_status: Option<u16>,
    calls: AtomicUsize,
}

impl MockLanguageRepository {
    pub fn new() -> Self {
        Self {
            languages: HashMap::new(),
            failure_status: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_languages(mut self, slug: &str, languages: &[&str]) -> Self {
        self.languages.insert(
            slug.to_string(),
            languages.iter().map(|l| l.to_string()).collect(),
        );
        self
    }

    pub fn with_failure(status: u16) -> Self {
        Self {
            failure_status: Some(status),
            ..Self::new()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockLanguageRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageRepository for MockLanguageRepository {
    fn fetch_languages(&self, slug: &RepositorySlug) -> Result<Vec<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(status) = self.failure_status {
            return Err(EnrichError::ExternalService {
                status,
                reason: "Mock failure".to_string(),
                endpoint: format!("mock://repos/{}/languages", slug),
            }
            .into());
        }

        Ok(self
            .languages
            .get(&slug.to_string())
            .cloned()
            .unwrap_or_default())
    }
}
