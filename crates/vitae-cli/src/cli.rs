//! CLI argument definitions and parsing.

use crate::config::{Config, ProviderKind};
use clap::Parser;
use std::path::PathBuf;

/// Vitae - Extract contact details and work history from a folder of resumes.
#[derive(Debug, Parser)]
#[command(name = "vitae")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Folder containing .pdf, .docx and .doc resumes (prompted when omitted)
    pub folder: Option<PathBuf>,

    /// CSV file to write [default: resume_output.csv]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// SQLite database to append to [default: resumes.db]
    #[arg(short, long)]
    pub database: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Completion provider
    #[arg(short, long, value_enum)]
    pub provider: Option<ProviderArg>,

    /// Model name override
    #[arg(short, long)]
    pub model: Option<String>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

/// Provider argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ProviderArg {
    /// Cohere generate API (needs COHERE_API_KEY)
    Cohere,
    /// Local Ollama server
    Ollama,
}

impl From<ProviderArg> for ProviderKind {
    fn from(provider: ProviderArg) -> Self {
        match provider {
            ProviderArg::Cohere => ProviderKind::Cohere,
            ProviderArg::Ollama => ProviderKind::Ollama,
        }
    }
}

impl Cli {
    /// Fold command line overrides into a loaded configuration.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(output) = &self.output {
            config.output.csv_path = output.clone();
        }
        if let Some(database) = &self.database {
            config.output.database_path = database.clone();
        }
        if let Some(provider) = self.provider {
            config.provider.kind = provider.into();
        }
        if let Some(model) = &self.model {
            config.provider.model = Some(model.clone());
        }
        if self.no_color {
            config.output.color = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_without_folder() {
        let cli = Cli::parse_from(["vitae"]);
        assert!(cli.folder.is_none());
        assert!(cli.output.is_none());
        assert!(!cli.no_color);
    }

    #[test]
    fn test_cli_parsing_with_flags() {
        let cli = Cli::parse_from([
            "vitae",
            "resumes/",
            "--output",
            "people.csv",
            "--provider",
            "ollama",
            "--no-color",
        ]);
        assert_eq!(cli.folder, Some(PathBuf::from("resumes/")));
        assert_eq!(cli.output, Some(PathBuf::from("people.csv")));
        assert!(matches!(cli.provider, Some(ProviderArg::Ollama)));
        assert!(cli.no_color);
    }

    #[test]
    fn test_overrides_win_over_config() {
        let cli = Cli::parse_from(["vitae", "-d", "other.db", "-p", "ollama", "-m", "mistral"]);
        let mut config = Config::default();
        cli.apply_to(&mut config);

        assert_eq!(config.output.database_path, PathBuf::from("other.db"));
        assert_eq!(config.output.csv_path, PathBuf::from("resume_output.csv"));
        assert_eq!(config.provider.kind, ProviderKind::Ollama);
        assert_eq!(config.provider.model.as_deref(), Some("mistral"));
        assert!(config.output.color);
    }

    #[test]
    fn test_provider_conversion() {
        let kind: ProviderKind = ProviderArg::Cohere.into();
        assert_eq!(kind, ProviderKind::Cohere);
    }
}
