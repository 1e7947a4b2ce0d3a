//! Error types for the Extractor

use thiserror::Error;

/// Errors that can occur during extraction
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Completion service error
    #[error("LLM error: {0}")]
    Llm(String),

    /// A completion call exceeded the configured timeout
    #[error("Extraction timeout")]
    Timeout,

    /// Response decoded as JSON but is not a record object
    #[error("Invalid record format: {0}")]
    InvalidFormat(String),

    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParse(String),
}

impl ExtractorError {
    /// Whether this error came from decoding a response rather than from the service
    pub fn is_parse_error(&self) -> bool {
        matches!(self, ExtractorError::InvalidFormat(_) | ExtractorError::JsonParse(_))
    }
}

impl From<serde_json::Error> for ExtractorError {
    fn from(e: serde_json::Error) -> Self {
        ExtractorError::JsonParse(e.to_string())
    }
}
