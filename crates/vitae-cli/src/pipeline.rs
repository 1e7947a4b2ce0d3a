//! Batch orchestration: normalize, extract, fall back, persist.
//!
//! Documents are processed one at a time. A failure in one document is
//! logged and recorded, and the batch moves on; only an unreadable folder
//! stops the run.

use crate::export::ExportRow;
use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{error, info, warn};
use vitae_domain::traits::{CompletionProvider, RecordStore};
use vitae_domain::ExtractedRecord;
use vitae_extractor::{fallback_identity, Extractor, ExtractorError};
use vitae_ingest::{is_supported_path, normalize_lines, DocumentFormat, IngestError, TextNormalizer};

/// Errors for a single document or for the batch as a whole
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Document could not be turned into text
    #[error("{0}")]
    Ingest(#[from] IngestError),

    /// Completion service failed or timed out
    #[error("{0}")]
    Extractor(#[from] ExtractorError),

    /// Record could not be saved
    #[error("Storage error: {0}")]
    Store(String),

    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// What happened to one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentOutcome {
    /// Extracted, saved and exported
    Processed {
        /// Source file name
        file_name: String,
        /// Number of work history entries found
        work_experience: usize,
        /// Whether contact details came from the regex fallback
        used_fallback: bool,
    },
    /// Skipped after an error
    Failed {
        /// Source file name
        file_name: String,
        /// Error message
        reason: String,
    },
}

impl DocumentOutcome {
    /// Source file name
    pub fn file_name(&self) -> &str {
        match self {
            DocumentOutcome::Processed { file_name, .. } | DocumentOutcome::Failed { file_name, .. } => {
                file_name
            }
        }
    }

    /// Whether the document was processed
    pub fn is_success(&self) -> bool {
        matches!(self, DocumentOutcome::Processed { .. })
    }
}

/// Result of processing a folder
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Export rows for processed documents, in processing order
    pub rows: Vec<ExportRow>,
    /// One outcome per attempted document, in processing order
    pub outcomes: Vec<DocumentOutcome>,
}

impl BatchReport {
    /// Number of processed documents
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    /// Number of failed documents
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }
}

/// Supported documents in `folder`, sorted by file name
pub fn list_documents(folder: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(folder)? {
        let path = entry?.path();
        if path.is_file() && is_supported_path(&path) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(paths)
}

/// Runs documents through extraction and storage
pub struct Pipeline<L, S>
where
    L: CompletionProvider,
    S: RecordStore,
{
    normalizer: TextNormalizer,
    extractor: Extractor<L>,
    store: S,
}

impl<L, S> Pipeline<L, S>
where
    L: CompletionProvider + Send + Sync + 'static,
    L::Error: Display,
    S: RecordStore,
    S::Error: Display,
{
    /// Create a new pipeline around an open store
    pub fn new(normalizer: TextNormalizer, extractor: Extractor<L>, store: S) -> Self {
        Self {
            normalizer,
            extractor,
            store,
        }
    }

    /// The store records are written to
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Process one document and save its record
    pub async fn process_document(
        &mut self,
        file_name: &str,
        bytes: &[u8],
    ) -> Result<ExtractedRecord, PipelineError> {
        let (record, _) = self.extract_document(file_name, bytes).await?;
        Ok(record)
    }

    /// Process every supported document in `folder`
    pub async fn process_folder(&mut self, folder: &Path) -> Result<BatchReport, PipelineError> {
        self.process_folder_with(folder, |_| {}).await
    }

    /// Process every supported document in `folder`, reporting each outcome as it happens
    pub async fn process_folder_with<F>(
        &mut self,
        folder: &Path,
        mut on_outcome: F,
    ) -> Result<BatchReport, PipelineError>
    where
        F: FnMut(&DocumentOutcome),
    {
        let documents = list_documents(folder)?;
        info!("Found {} resumes in {}", documents.len(), folder.display());

        let mut report = BatchReport::default();

        for path in documents {
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());

            let result = match fs::read(&path) {
                Ok(bytes) => self.extract_document(&file_name, &bytes).await,
                Err(e) => Err(PipelineError::Io(e)),
            };

            let outcome = match result {
                Ok((record, used_fallback)) => {
                    report.rows.push(ExportRow::from_record(&file_name, &record));
                    DocumentOutcome::Processed {
                        file_name,
                        work_experience: record.work_experience.len(),
                        used_fallback,
                    }
                }
                Err(e) => {
                    error!("Failed to process {}: {}", file_name, e);
                    DocumentOutcome::Failed {
                        file_name,
                        reason: e.to_string(),
                    }
                }
            };

            on_outcome(&outcome);
            report.outcomes.push(outcome);
        }

        info!(
            "Batch complete: {} processed, {} failed",
            report.succeeded(),
            report.failed()
        );
        Ok(report)
    }

    async fn extract_document(
        &mut self,
        file_name: &str,
        bytes: &[u8],
    ) -> Result<(ExtractedRecord, bool), PipelineError> {
        info!("Processing {}", file_name);

        let format = DocumentFormat::from_path(file_name)?;
        let text = self.normalizer.extract_text(bytes, format)?;
        let mut record = self.extractor.extract(&text).await?;

        let used_fallback = record.is_identity_empty();
        if used_fallback {
            let (email, phone) = fallback_identity(&normalize_lines(&text));
            warn!(
                "No identity extracted from {}, regex fallback found email: {}, phone: {}",
                file_name,
                email.is_some(),
                phone.is_some()
            );
            record = record.with_fallback_identity(email, phone);
        }

        self.store
            .save_record(&record, file_name)
            .map_err(|e| PipelineError::Store(e.to_string()))?;

        Ok((record, used_fallback))
    }
}
