use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish rejected input from
/// infrastructure failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the request was valid / all SBOMs were enriched
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (API error, network error, file I/O error, etc.)
    ApplicationError = 3,
    /// The supplied document was rejected (schema violation, malformed SBOM)
    InputRejected = 4,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Selects the exit code for an error returned from the application.
    pub fn for_error(error: &anyhow::Error) -> Self {
        match error.downcast_ref::<EnrichError>() {
            Some(e) if e.is_input_rejection() => ExitCode::InputRejected,
            _ => ExitCode::ApplicationError,
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
            ExitCode::InputRejected => write!(f, "Input Rejected (4)"),
        }
    }
}

/// Application-specific errors for scan request validation and SBOM enrichment.
///
/// Transport failures are not represented here: they surface as the
/// underlying `reqwest::Error` inside the `anyhow::Error` chain.
#[derive(Debug, Error)]
pub enum EnrichError {
    #[error("Invalid scan request: {details}\n\n💡 Hint: Check the request against the expected image/scan schema")]
    SchemaValidation { details: String },

    #[error("Malformed SBOM: {path}\nReason: {reason}\n\n💡 Hint: The SBOM must be a syft-generated CycloneDX document with OpenShift build labels")]
    MalformedSbom { path: String, reason: String },

    #[error("Unsupported repository URL: {url}\nReason: {reason}\n\n💡 Hint: Only GitHub clone URLs (https://github.com/owner/repo.git) are supported")]
    UnsupportedRepositoryUrl { url: String, reason: String },

    #[error("GitHub API request failed: {status} - {reason}\nEndpoint: {endpoint}")]
    ExternalService {
        status: u16,
        reason: String,
        endpoint: String,
    },

    #[error("Failed to parse JSON document: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file contains valid JSON")]
    InvalidDocument { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },
}

impl EnrichError {
    /// Shorthand for a `MalformedSbom` error.
    pub fn malformed(path: impl Into<String>, reason: impl Into<String>) -> Self {
        EnrichError::MalformedSbom {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// True when the error is caused by the caller's input rather than
    /// by the environment.
    pub fn is_input_rejection(&self) -> bool {
        matches!(
            self,
            EnrichError::SchemaValidation { .. }
                | EnrichError::MalformedSbom { .. }
                | EnrichError::UnsupportedRepositoryUrl { .. }
                | EnrichError::InvalidDocument { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
        assert_eq!(ExitCode::InputRejected.as_i32(), 4);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::InputRejected),
            "Input Rejected (4)"
        );
    }

    #[test]
    fn test_exit_code_for_input_errors() {
        let err: anyhow::Error = EnrichError::malformed("metadata.component.name", "missing").into();
        assert_eq!(ExitCode::for_error(&err), ExitCode::InputRejected);

        let err: anyhow::Error = EnrichError::SchemaValidation {
            details: "missing field `image`".to_string(),
        }
        .into();
        assert_eq!(ExitCode::for_error(&err), ExitCode::InputRejected);
    }

    #[test]
    fn test_exit_code_for_service_errors() {
        let err: anyhow::Error = EnrichError::ExternalService {
            status: 503,
            reason: "Service Unavailable".to_string(),
            endpoint: "https://api.github.com/repos/acme/widgets/languages".to_string(),
        }
        .into();
        assert_eq!(ExitCode::for_error(&err), ExitCode::ApplicationError);

        let err = anyhow::anyhow!("connection refused");
        assert_eq!(ExitCode::for_error(&err), ExitCode::ApplicationError);
    }

    #[test]
    fn test_malformed_sbom_display() {
        let error = EnrichError::malformed("metadata.component.version", "key not found");
        let display = format!("{}", error);
        assert!(display.contains("Malformed SBOM"));
        assert!(display.contains("metadata.component.version"));
        assert!(display.contains("key not found"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_external_service_display() {
        let error = EnrichError::ExternalService {
            status: 404,
            reason: "Not Found".to_string(),
            endpoint: "https://api.github.com/repos/acme/missing/languages".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("404 - Not Found"));
        assert!(display.contains("acme/missing"));
    }

    #[test]
    fn test_unsupported_repository_url_display() {
        let error = EnrichError::UnsupportedRepositoryUrl {
            url: "https://gitlab.com/acme/widgets.git".to_string(),
            reason: "host 'gitlab.com' is not github.com".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("gitlab.com/acme/widgets.git"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_file_read_error_display() {
        let error = EnrichError::FileReadError {
            path: PathBuf::from("/test/sbom.json"),
            details: "File not found".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to read file"));
        assert!(display.contains("/test/sbom.json"));
        assert!(display.contains("File not found"));
    }
}
