use crate::ports::outbound::LanguageRepository;
use crate::sbom_enrichment::domain::RepositorySlug;
use crate::shared::error::EnrichError;
use crate::shared::Result;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde_json::{Map, Value};
use std::time::Duration;

/// GitHub REST API client for repository language statistics
///
/// Implements the LanguageRepository port against
/// `GET {api_base_url}/repos/{owner}/{repo}/languages`.
///
/// # Behavior
/// - One request per call: no retry, no caching
/// - No authentication headers are sent
/// - Non-2xx responses fail with `EnrichError::ExternalService`
/// - Transport failures surface as `reqwest::Error`
pub struct GitHubLanguageRepository {
    client: Client,
    api_base_url: String,
}

impl GitHubLanguageRepository {
    pub const DEFAULT_API_URL: &'static str = "https://api.github.com";

    /// Creates a client for the public GitHub API with reqwest's default timeout
    pub fn new() -> Result<Self> {
        Self::with_settings(Self::DEFAULT_API_URL, None)
    }

    /// Creates a client for a specific API base URL (GitHub Enterprise, test servers)
    ///
    /// # Arguments
    /// * `api_base_url` - Base URL without trailing `/repos`
    /// * `timeout` - Overall request timeout; `None` keeps reqwest's default
    pub fn with_settings(api_base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("sbom-enricher/{}", version);
        let mut builder = Client::builder().user_agent(user_agent);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Builds the languages endpoint URL for a repository
    pub fn languages_url(&self, slug: &RepositorySlug) -> String {
        format!(
            "{}/repos/{}/{}/languages",
            self.api_base_url,
            urlencoding::encode(slug.owner()),
            urlencoding::encode(slug.name())
        )
    }
}

impl LanguageRepository for GitHubLanguageRepository {
    fn fetch_languages(&self, slug: &RepositorySlug) -> Result<Vec<String>> {
        let url = self.languages_url(slug);

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/vnd.github+json")
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(EnrichError::ExternalService {
                status: status.as_u16(),
                reason: reason_phrase(status),
                endpoint: url,
            }
            .into());
        }

        // Byte counts are irrelevant; only the key order matters.
        let breakdown: Map<String, Value> = response.json()?;
        Ok(breakdown.into_iter().map(|(name, _)| name).collect())
    }
}

/// Standard reason phrase for a status, or `HTTP <code>` for codes the
/// HTTP registry does not name. The server's own phrase is not exposed by
/// the client.
fn reason_phrase(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| format!("HTTP {}", status.as_u16()))
}
