//! Error types for the CLI application.

use crate::pipeline::PipelineError;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Completion provider could not be set up
    #[error("Provider error: {0}")]
    Provider(#[from] vitae_llm::LlmError),

    /// Database could not be opened
    #[error("Storage error: {0}")]
    Store(#[from] vitae_store::StoreError),

    /// Batch processing error
    #[error("{0}")]
    Pipeline(#[from] PipelineError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Interactive prompt failed
    #[error("Input error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
