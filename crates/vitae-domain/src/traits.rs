//! Trait definitions for external interactions
//!
//! These traits define the boundaries between extraction logic and
//! infrastructure. Infrastructure implementations live in other crates.

use crate::ExtractedRecord;

/// Trait for text-completion services
///
/// Implemented by the infrastructure layer (vitae-llm). Output is free-form
/// text that usually, but not reliably, contains one JSON object.
pub trait CompletionProvider {
    /// Error type for completion calls
    type Error;

    /// Complete a prompt at the given sampling temperature
    fn complete(&self, prompt: &str, temperature: f32) -> Result<String, Self::Error>;

    /// Model identifier used for logging
    fn model_name(&self) -> &str {
        "llm"
    }
}

/// Trait for persisting extracted records
///
/// Implemented by the infrastructure layer (vitae-store)
pub trait RecordStore {
    /// Error type for store operations
    type Error;

    /// Store one record and its work history; returns the parent row id
    fn save_record(&mut self, record: &ExtractedRecord, file_name: &str) -> Result<i64, Self::Error>;

    /// Load a stored record by parent row id
    fn get_record(&self, id: i64) -> Result<Option<StoredRecord>, Self::Error>;

    /// Delete a stored record together with its work history
    fn delete_record(&mut self, id: i64) -> Result<bool, Self::Error>;
}

/// A record as read back from storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredRecord {
    /// Parent row id
    pub id: i64,

    /// Source document file name
    pub file_name: String,

    /// Extracted content; skills are split back out of their joined form
    pub record: ExtractedRecord,
}
