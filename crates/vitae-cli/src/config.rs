//! Configuration management for the CLI.
//!
//! Settings come from `~/.vitae/config.toml` (or `--config`), then command
//! line flags override them. Secrets are never read from this file; the
//! Cohere API key only comes from the environment.

use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use vitae_extractor::ExtractorConfig;

/// Default CSV export path
pub const DEFAULT_CSV_PATH: &str = "resume_output.csv";

/// Default SQLite database path
pub const DEFAULT_DATABASE_PATH: &str = "resumes.db";

/// Default model for local Ollama runs
pub const DEFAULT_OLLAMA_MODEL: &str = "llama3";

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Extraction settings
    #[serde(default)]
    pub extractor: ExtractorConfig,

    /// Completion provider settings
    #[serde(default)]
    pub provider: ProviderSettings,

    /// Output locations and display settings
    #[serde(default)]
    pub output: OutputSettings,
}

/// Completion provider selection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProviderSettings {
    /// Which service to call
    #[serde(default)]
    pub kind: ProviderKind,

    /// Model override; each provider has its own default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Endpoint override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
}

/// Supported completion services.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Cohere generate API
    #[default]
    Cohere,
    /// Local Ollama server
    Ollama,
}

/// Output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputSettings {
    /// CSV export path
    #[serde(default = "default_csv_path")]
    pub csv_path: PathBuf,

    /// SQLite database path
    #[serde(default = "default_database_path")]
    pub database_path: PathBuf,

    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,
}

impl Config {
    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".vitae").join("config.toml"))
    }

    /// Load configuration from the default path, or defaults when it does not exist.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;

        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        Self::from_toml(&contents)
    }

    /// Parse and validate configuration.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        self.extractor.validate().map_err(CliError::Config)
    }
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            csv_path: default_csv_path(),
            database_path: default_database_path(),
            color: true,
        }
    }
}

fn default_csv_path() -> PathBuf {
    PathBuf::from(DEFAULT_CSV_PATH)
}

fn default_database_path() -> PathBuf {
    PathBuf::from(DEFAULT_DATABASE_PATH)
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.provider.kind, ProviderKind::Cohere);
        assert_eq!(config.output.csv_path, PathBuf::from("resume_output.csv"));
        assert_eq!(config.output.database_path, PathBuf::from("resumes.db"));
        assert!(config.output.color);
        assert_eq!(config.extractor, ExtractorConfig::default());
    }

    #[test]
    fn test_empty_file_gives_defaults() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn test_sections_are_read() {
        let config = Config::from_toml(
            r#"
            [extractor]
            chunk_size = 3
            inter_chunk_delay_secs = 0

            [provider]
            kind = "ollama"
            model = "mistral"

            [output]
            csv_path = "out/people.csv"
            color = false
            "#,
        )
        .unwrap();

        assert_eq!(config.extractor.chunk_size, 3);
        assert_eq!(config.extractor.temperature, 0.2);
        assert_eq!(config.provider.kind, ProviderKind::Ollama);
        assert_eq!(config.provider.model.as_deref(), Some("mistral"));
        assert_eq!(config.output.csv_path, PathBuf::from("out/people.csv"));
        assert_eq!(config.output.database_path, PathBuf::from("resumes.db"));
        assert!(!config.output.color);
    }

    #[test]
    fn test_invalid_extractor_settings_are_rejected() {
        let result = Config::from_toml("[extractor]\nchunk_size = 0\n");
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn test_unknown_provider_is_rejected() {
        let result = Config::from_toml("[provider]\nkind = \"openai\"\n");
        assert!(matches!(result, Err(CliError::Toml(_))));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[output]\ndatabase_path = \"cv.db\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.output.database_path, PathBuf::from("cv.db"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = Config::load_from("/nonexistent/vitae/config.toml");
        assert!(matches!(result, Err(CliError::Io(_))));
    }
}
