//! Configuration file support for sbom-enricher.
//!
//! Provides YAML-based configuration through `sbom-enricher.config.yml`
//! files, plus resolution of the effective settings from config and flags.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use crate::adapters::outbound::network::GitHubLanguageRepository;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "sbom-enricher.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// GitHub API base URL (GitHub Enterprise: `https://host/api/v3`).
    pub api_base_url: Option<String>,
    /// Request timeout for the languages lookup.
    pub timeout_secs: Option<u64>,
    /// Pretty-print JSON output (default: true).
    pub pretty: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    load_config_from_path(&config_path).map(Some)
}

fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref url) = config.api_base_url {
        if url.trim().is_empty() {
            bail!(
                "Invalid config: api_base_url must not be empty.\n\n\
                 💡 Hint: Remove the key to use {}.",
                GitHubLanguageRepository::DEFAULT_API_URL
            );
        }
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            bail!(
                "Invalid config: api_base_url '{}' must start with http:// or https://.",
                url
            );
        }
    }
    if config.timeout_secs == Some(0) {
        bail!(
            "Invalid config: timeout_secs must be greater than 0.\n\n\
             💡 Hint: Remove the key to use the HTTP client's default timeout."
        );
    }
    Ok(())
}

impl ConfigFile {
    /// One warning per unrecognized key, sorted by key.
    pub fn unknown_field_warnings(&self) -> Vec<String> {
        let mut keys: Vec<&String> = self.unknown_fields.keys().collect();
        keys.sort();
        keys.into_iter()
            .map(|key| format!("⚠️  Warning: Unknown config field '{}' will be ignored.", key))
            .collect()
    }
}

/// Effective settings after applying precedence: flag > config file > default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_base_url: String,
    pub timeout: Option<Duration>,
    pub pretty: bool,
}

impl Settings {
    pub fn resolve(config: Option<&ConfigFile>, api_url_flag: Option<&str>, compact_flag: bool) -> Self {
        let api_base_url = api_url_flag
            .map(str::to_string)
            .or_else(|| config.and_then(|c| c.api_base_url.clone()))
            .unwrap_or_else(|| GitHubLanguageRepository::DEFAULT_API_URL.to_string());

        let timeout = config
            .and_then(|c| c.timeout_secs)
            .map(Duration::from_secs);

        let pretty = !compact_flag && config.and_then(|c| c.pretty).unwrap_or(true);

        Self {
            api_base_url,
            timeout,
            pretty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
api_base_url: https://github.example.com/api/v3
timeout_secs: 15
pretty: false
"#,
        )
        .unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(
            config.api_base_url.as_deref(),
            Some("https://github.example.com/api/v3")
        );
        assert_eq!(config.timeout_secs, Some(15));
        assert_eq!(config.pretty, Some(false));
        assert!(config.unknown_fields.is_empty());
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "pretty: true\n").unwrap();

        let config = discover_config(dir.path()).unwrap().unwrap();
        assert_eq!(config.pretty, Some(true));
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        assert!(discover_config(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config_from_path(Path::new("/nonexistent/config.yml"));
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("bad.yml");
        fs::write(&config_path, "invalid: yaml: [[[broken").unwrap();

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("Failed to parse config file"));
    }

    #[test]
    fn test_wrong_type_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "timeout_secs: soon\n").unwrap();

        assert!(load_config_from_path(&config_path).is_err());
    }

    #[test]
    fn test_empty_api_url_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "api_base_url: \"  \"\n").unwrap();

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("must not be empty"));
    }

    #[test]
    fn test_api_url_without_scheme_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "api_base_url: api.github.com\n").unwrap();

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("must start with http"));
    }

    #[test]
    fn test_zero_timeout_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "timeout_secs: 0\n").unwrap();

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("greater than 0"));
    }

    #[test]
    fn test_unknown_fields_collected() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
pretty: true
github_token: secret
retries: 3
"#,
        )
        .unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.unknown_fields.len(), 2);
        assert!(config.unknown_fields.contains_key("github_token"));
        assert!(config.unknown_fields.contains_key("retries"));
        assert_eq!(
            config.unknown_field_warnings(),
            vec![
                "⚠️  Warning: Unknown config field 'github_token' will be ignored.",
                "⚠️  Warning: Unknown config field 'retries' will be ignored.",
            ]
        );
    }

    #[test]
    fn test_known_fields_produce_no_warnings() {
        let config = ConfigFile {
            pretty: Some(true),
            ..Default::default()
        };
        assert!(config.unknown_field_warnings().is_empty());
    }

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::resolve(None, None, false);
        assert_eq!(settings.api_base_url, "https://api.github.com");
        assert_eq!(settings.timeout, None);
        assert!(settings.pretty);
    }

    #[test]
    fn test_settings_from_config() {
        let config = ConfigFile {
            api_base_url: Some("https://github.example.com/api/v3".to_string()),
            timeout_secs: Some(20),
            pretty: Some(false),
            ..Default::default()
        };
        let settings = Settings::resolve(Some(&config), None, false);
        assert_eq!(settings.api_base_url, "https://github.example.com/api/v3");
        assert_eq!(settings.timeout, Some(Duration::from_secs(20)));
        assert!(!settings.pretty);
    }

    #[test]
    fn test_flags_override_config() {
        let config = ConfigFile {
            api_base_url: Some("https://github.example.com/api/v3".to_string()),
            pretty: Some(true),
            ..Default::default()
        };
        let settings = Settings::resolve(Some(&config), Some("http://127.0.0.1:8080"), true);
        assert_eq!(settings.api_base_url, "http://127.0.0.1:8080");
        assert!(!settings.pretty);
    }
}
