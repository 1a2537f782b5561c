use crate::shared::error::EnrichError;
use crate::shared::Result;
use url::Url;

/// Hosts whose clone URLs map onto the GitHub REST API.
const GITHUB_HOSTS: [&str; 2] = ["github.com", "www.github.com"];

/// Schemes accepted for URL-form clone addresses.
const SUPPORTED_SCHEMES: [&str; 4] = ["https", "http", "ssh", "git"];

/// GitHub caps owner and repository names well below this.
const MAX_SEGMENT_LENGTH: usize = 100;

/// `owner/name` identifier used by the GitHub REST API URL templates.
///
/// Both segments are validated on construction, so a slug can be placed
/// into an API path without further checks.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositorySlug {
    owner: String,
    name: String,
}

impl RepositorySlug {
    /// Derives the slug from a git clone URL.
    ///
    /// Accepts `http(s)://`, `ssh://` and `git://` URLs as well as the
    /// scp-like `git@github.com:owner/repo.git` form. A trailing `.git`
    /// and a trailing `/` are ignored. Anything that is not a two-segment
    /// path on github.com fails with `UnsupportedRepositoryUrl`.
    pub fn from_clone_url(clone_url: &str) -> Result<Self> {
        let unsupported = |reason: String| -> anyhow::Error {
            EnrichError::UnsupportedRepositoryUrl {
                url: clone_url.to_string(),
                reason,
            }
            .into()
        };

        let trimmed = clone_url.trim();
        let (host, path) = match split_scp_like(trimmed) {
            Some((host, path)) => (host.to_ascii_lowercase(), path.to_string()),
            None => {
                let parsed = Url::parse(trimmed)
                    .map_err(|e| unsupported(format!("not a valid URL ({})", e)))?;

                if !SUPPORTED_SCHEMES.contains(&parsed.scheme()) {
                    return Err(unsupported(format!(
                        "scheme '{}' is not supported",
                        parsed.scheme()
                    )));
                }
                if parsed.query().is_some() || parsed.fragment().is_some() {
                    return Err(unsupported(
                        "query strings and fragments are not allowed".to_string(),
                    ));
                }

                let host = parsed.host_str().unwrap_or_default().to_string();
                (host, parsed.path().to_string())
            }
        };

        if !GITHUB_HOSTS.contains(&host.as_str()) {
            return Err(unsupported(format!("host '{}' is not github.com", host)));
        }

        let segments: Vec<&str> = path
            .trim_matches('/')
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        let (owner, name) = match segments.as_slice() {
            [owner, name] => (*owner, name.strip_suffix(".git").unwrap_or(name)),
            _ => {
                return Err(unsupported(format!(
                    "expected a path of the form /owner/repository, got '{}'",
                    path
                )))
            }
        };

        validate_segment(owner, "owner").map_err(unsupported)?;
        validate_segment(name, "repository name").map_err(unsupported)?;

        Ok(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for RepositorySlug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Splits `user@host:path` into `(host, path)`. URL-form addresses
/// (containing `://`) return `None`.
fn split_scp_like(address: &str) -> Option<(&str, &str)> {
    if address.contains("://") {
        return None;
    }
    let (user_host, path) = address.split_once(':')?;
    if user_host.contains('/') {
        return None;
    }
    let host = user_host.rsplit('@').next().unwrap_or(user_host);
    Some((host, path))
}

fn validate_segment(segment: &str, what: &str) -> std::result::Result<(), String> {
    if segment.is_empty() {
        return Err(format!("{} is empty", what));
    }
    if segment.len() > MAX_SEGMENT_LENGTH {
        return Err(format!(
            "{} is too long ({} bytes). Maximum allowed: {} bytes",
            what,
            segment.len(),
            MAX_SEGMENT_LENGTH
        ));
    }
    if segment == "." || segment == ".." {
        return Err(format!("{} '{}' is not allowed", what, segment));
    }
    if !segment
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
    {
        return Err(format!(
            "{} '{}' contains invalid characters. Only alphanumeric, hyphens, underscores and dots are allowed.",
            what, segment
        ));
    }
    Ok(())
}
