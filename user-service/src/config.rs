// Application configuration
// Defaults, optional YAML file, then environment overrides

use crate::error::{ServiceError, ServiceResult};

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_API_URL: &str = "https://jsonplaceholder.typicode.com";
pub const API_URL_ENV: &str = "USERDECK_API_URL";
pub const LOG_LEVEL_ENV: &str = "USERDECK_LOG_LEVEL";

/// Runtime configuration shared by the TUI and the CLI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL the `/users` paths are joined onto
    pub api_url: String,

    /// Per-request timeout. `None` leaves it to the HTTP stack.
    pub request_timeout_secs: Option<u64>,

    /// Default tracing directive when `RUST_LOG` is unset
    pub log_level: String,

    /// Directory for rolling log files
    pub log_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout_secs: None,
            log_level: "info".to_string(),
            log_dir: home_dir().join("logs"),
        }
    }
}

fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".userdeck")
}

impl AppConfig {
    /// `~/.userdeck/config.yaml`
    pub fn default_path() -> PathBuf {
        home_dir().join("config.yaml")
    }

    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one the default location is
    /// tried and silently skipped when absent.
    pub fn load(path: Option<&Path>) -> ServiceResult<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = Self::default_path();
                if default_path.is_file() {
                    Self::from_file(&default_path)?
                } else {
                    Self::default()
                }
            }
        };
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> ServiceResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            ServiceError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_yaml(&content)
            .map_err(|e| ServiceError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn from_yaml(content: &str) -> ServiceResult<Self> {
        // An empty file is a valid "all defaults" config
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| ServiceError::Config(e.to_string()))
    }

    fn apply_env(&mut self) {
        if let Ok(url) = env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                self.api_url = url;
            }
        }
        if let Ok(level) = env::var(LOG_LEVEL_ENV) {
            if !level.trim().is_empty() {
                self.log_level = level;
            }
        }
    }

    /// Override the API URL (from a command-line flag)
    pub fn with_api_url(mut self, url: Option<String>) -> ServiceResult<Self> {
        if let Some(url) = url {
            self.api_url = url;
            self.validate()?;
        }
        Ok(self)
    }

    pub fn validate(&self) -> ServiceResult<()> {
        let url = reqwest::Url::parse(&self.api_url).map_err(|e| {
            ServiceError::Config(format!("Invalid api_url '{}': {}", self.api_url, e))
        })?;
        match url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(ServiceError::Config(format!(
                "Unsupported api_url scheme '{}'",
                other
            ))),
        }
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.request_timeout(), None);
        assert_eq!(config.log_level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = AppConfig::from_yaml("api_url: http://localhost:3000\n").unwrap();
        assert_eq!(config.api_url, "http://localhost:3000");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(AppConfig::from_yaml("  \n").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "api_url: https://users.internal").unwrap();
        writeln!(file, "request_timeout_secs: 5").unwrap();
        writeln!(file, "log_level: debug").unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.api_url, "https://users.internal");
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(5)));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "request_timeout_secs: [not, a, number]").unwrap();

        let err = AppConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ServiceError::Config(_)));
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = AppConfig::load(Some(&dir.path().join("nope.yaml")));
        assert!(matches!(result, Err(ServiceError::Config(_))));
    }

    #[test]
    fn test_rejects_non_http_url() {
        let config = AppConfig::default();
        assert!(config.clone().with_api_url(Some("ftp://example.com".into())).is_err());
        assert!(config.clone().with_api_url(Some("not a url".into())).is_err());
        let config = config.with_api_url(Some("http://127.0.0.1:8080".into())).unwrap();
        assert_eq!(config.api_url, "http://127.0.0.1:8080");
    }
}
