use crate::{Error, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub backend: BackendConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct GeneralConfig {
    pub log_level: String,
    pub log_format: LogFormat,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct BackendConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            timeout_secs: 30,
        }
    }
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path` when it exists, otherwise falls back to defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Replaces the backend URL, re-running validation on the result.
    pub fn with_backend_url(mut self, url: impl Into<String>) -> Result<Self> {
        self.backend.base_url = url.into();
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        let url = &self.backend.base_url;
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(Error::Config(format!("backend.base_url must be an http(s) URL, got {url:?}")));
        }
        if self.backend.timeout_secs == 0 {
            return Err(Error::Config("backend.timeout_secs must be positive".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_full_file() {
        let file = write_config(
            r#"
            [general]
            log_level = "debug"
            log_format = "json"

            [backend]
            base_url = "https://hostel.example.com"
            timeout_secs = 10
            "#,
        );
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.general.log_level, "debug");
        assert_eq!(config.general.log_format, LogFormat::Json);
        assert_eq!(config.backend.base_url, "https://hostel.example.com");
        assert_eq!(config.backend.timeout_secs, 10);
    }

    #[test]
    fn missing_sections_take_defaults() {
        let file = write_config("[backend]\nbase_url = \"http://10.0.0.5:8080\"\n");
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.backend.timeout_secs, 30);
    }

    #[test]
    fn rejects_non_http_backend() {
        let file = write_config("[backend]\nbase_url = \"ftp://hostel\"\n");
        assert!(matches!(Config::load(file.path()), Err(Error::Config(_))));
    }

    #[test]
    fn backend_url_override_is_validated() {
        let config = Config::default().with_backend_url("https://hostel.example.com").unwrap();
        assert_eq!(config.backend.base_url, "https://hostel.example.com");

        let err = Config::default().with_backend_url("ftp://hostel").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn absent_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_default(dir.path().join("hostelry.toml")).unwrap();
        assert_eq!(config.backend.base_url, "http://localhost:5000");
    }
}
