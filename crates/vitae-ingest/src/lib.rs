//! Vitae Ingest
//!
//! Turns resume files into plain text. Every supported format goes through a
//! single capability, [`TextNormalizer::extract_text`], so the extraction
//! pipeline never sees format details.
//!
//! | Extension | Decoder |
//! |-----------|---------|
//! | `pdf`     | `pdf-extract` text layer |
//! | `docx`    | `word/document.xml`, paragraphs and table rows in body order |
//! | `doc`     | converted to DOCX by a [`DocConverter`], then decoded as DOCX |

#![warn(missing_docs)]

mod doc;
mod docx;
mod pdf;

use std::fmt;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

pub use doc::{DocConverter, NoConverter, SofficeConverter};

/// Errors that can occur while turning a file into text
#[derive(Error, Debug)]
pub enum IngestError {
    /// The file extension is not one of pdf, docx, doc
    #[error("Unsupported file type: {0}")]
    UnsupportedFormat(String),

    /// The bytes could not be decoded as the declared format
    #[error("Failed to decode {format} document: {reason}")]
    Decode {
        /// Declared format
        format: DocumentFormat,
        /// Decoder message
        reason: String,
    },

    /// No converter for legacy DOC files is installed on this host
    #[error("DOC conversion unavailable: {0}")]
    ConverterUnavailable(String),

    /// The DOC converter ran but did not produce a document
    #[error("DOC conversion failed: {0}")]
    Conversion(String),

    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Supported resume file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentFormat {
    /// Portable Document Format
    Pdf,
    /// Office Open XML word processing document
    Docx,
    /// Legacy Word 97-2003 binary document
    Doc,
}

impl DocumentFormat {
    /// Every supported extension, lowercase and without the dot
    pub const EXTENSIONS: [&'static str; 3] = ["pdf", "docx", "doc"];

    /// Map a file extension (case-insensitive, without the dot) to a format
    ///
    /// # Examples
    ///
    /// ```
    /// use vitae_ingest::DocumentFormat;
    ///
    /// assert_eq!(DocumentFormat::from_extension("PDF").unwrap(), DocumentFormat::Pdf);
    /// assert!(DocumentFormat::from_extension("txt").is_err());
    /// ```
    pub fn from_extension(ext: &str) -> Result<Self, IngestError> {
        match ext.to_lowercase().as_str() {
            "pdf" => Ok(DocumentFormat::Pdf),
            "docx" => Ok(DocumentFormat::Docx),
            "doc" => Ok(DocumentFormat::Doc),
            other => Err(IngestError::UnsupportedFormat(other.to_string())),
        }
    }

    /// Determine the format from a file name or path
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, IngestError> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("");
        Self::from_extension(ext)
    }

    /// Lowercase extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            DocumentFormat::Pdf => "pdf",
            DocumentFormat::Docx => "docx",
            DocumentFormat::Doc => "doc",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Whether a path has one of the supported extensions
pub fn is_supported_path(path: impl AsRef<Path>) -> bool {
    DocumentFormat::from_path(path).is_ok()
}

/// Single entry point for `bytes + format -> text`
pub struct TextNormalizer {
    doc_converter: Box<dyn DocConverter>,
}

impl TextNormalizer {
    /// Create a normalizer that converts DOC files with LibreOffice
    pub fn new() -> Self {
        Self::with_doc_converter(SofficeConverter::default())
    }

    /// Create a normalizer with a specific DOC converter
    pub fn with_doc_converter(converter: impl DocConverter + 'static) -> Self {
        Self {
            doc_converter: Box::new(converter),
        }
    }

    /// Extract plain text from document bytes
    pub fn extract_text(&self, bytes: &[u8], format: DocumentFormat) -> Result<String, IngestError> {
        let text = match format {
            DocumentFormat::Pdf => pdf::extract_pdf(bytes)?,
            DocumentFormat::Docx => docx::extract_docx(bytes)?,
            DocumentFormat::Doc => {
                let converted = self.doc_converter.convert_to_docx(bytes)?;
                docx::extract_docx(&converted)?
            }
        };
        debug!("Extracted {} chars from {} document", text.len(), format);
        Ok(text)
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Trimmed, non-empty lines of a text
pub fn normalize_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

pub(crate) fn decode_error(format: DocumentFormat, reason: impl fmt::Display) -> IngestError {
    IngestError::Decode {
        format,
        reason: reason.to_string(),
    }
}
