//! Legacy Word (.doc) conversion
//!
//! The binary DOC format is not decoded directly. A [`DocConverter`] turns it
//! into DOCX first. Conversion depends on the host: the default converter
//! needs LibreOffice on `PATH`, and hosts without it should plug in
//! [`NoConverter`] so DOC files fail cleanly.

use crate::IngestError;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::process::Command;
use tracing::debug;

/// Converts legacy DOC bytes into DOCX bytes
pub trait DocConverter: Send + Sync {
    /// Convert one document
    fn convert_to_docx(&self, doc_bytes: &[u8]) -> Result<Vec<u8>, IngestError>;
}

/// Converter backed by LibreOffice's headless mode
///
/// Runs `soffice --headless --convert-to docx --outdir <tmp> <tmp>/input.doc`.
#[derive(Debug, Clone)]
pub struct SofficeConverter {
    binary: PathBuf,
}

impl SofficeConverter {
    /// Use a specific LibreOffice binary
    pub fn with_binary(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

impl Default for SofficeConverter {
    fn default() -> Self {
        Self::with_binary("soffice")
    }
}

impl DocConverter for SofficeConverter {
    fn convert_to_docx(&self, doc_bytes: &[u8]) -> Result<Vec<u8>, IngestError> {
        let workdir = tempfile::tempdir()?;
        let input = workdir.path().join("input.doc");
        fs::write(&input, doc_bytes)?;

        debug!("Converting DOC with {}", self.binary.display());
        let output = Command::new(&self.binary)
            .arg("--headless")
            .arg("--convert-to")
            .arg("docx")
            .arg("--outdir")
            .arg(workdir.path())
            .arg(&input)
            .output()
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => {
                    IngestError::ConverterUnavailable(format!("{} not found", self.binary.display()))
                }
                _ => IngestError::Io(e),
            })?;

        if !output.status.success() {
            return Err(IngestError::Conversion(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ));
        }

        let converted = workdir.path().join("input.docx");
        fs::read(&converted).map_err(|e| {
            IngestError::Conversion(format!("converter produced no output: {}", e))
        })
    }
}

/// Converter for hosts without DOC support; always reports unavailability
#[derive(Debug, Clone, Copy, Default)]
pub struct NoConverter;

impl DocConverter for NoConverter {
    fn convert_to_docx(&self, _doc_bytes: &[u8]) -> Result<Vec<u8>, IngestError> {
        Err(IngestError::ConverterUnavailable(
            "no DOC converter configured".to_string(),
        ))
    }
}
