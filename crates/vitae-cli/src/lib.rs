//! Vitae CLI library.
//!
//! This library provides the core functionality for the `vitae` command-line
//! interface: configuration loading, provider selection, batch orchestration,
//! CSV export and output formatting.

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod interactive;
pub mod output;
pub mod pipeline;
pub mod provider;

pub use cli::Cli;
pub use config::Config;
pub use error::{CliError, Result};
pub use export::{write_csv, ExportRow};
pub use output::Formatter;
pub use pipeline::{BatchReport, DocumentOutcome, Pipeline, PipelineError};
pub use provider::SelectedProvider;
