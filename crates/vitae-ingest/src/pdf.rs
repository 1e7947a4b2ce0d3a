//! PDF text layer extraction

use crate::{decode_error, DocumentFormat, IngestError};
use std::panic::{self, AssertUnwindSafe};

/// Extract the text layer of a PDF held in memory.
///
/// `pdf-extract` panics on some malformed inputs; a panic is reported as a
/// decode error so one bad file cannot take down a batch.
pub(crate) fn extract_pdf(bytes: &[u8]) -> Result<String, IngestError> {
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem(bytes)
    }));

    match result {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => Err(decode_error(DocumentFormat::Pdf, e)),
        Err(_) => Err(decode_error(DocumentFormat::Pdf, "PDF parser panicked")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_bytes_are_a_decode_error() {
        assert!(matches!(
            extract_pdf(&[]),
            Err(IngestError::Decode { format: DocumentFormat::Pdf, .. })
        ));
    }

    #[test]
    fn test_non_pdf_bytes_are_a_decode_error() {
        assert!(matches!(
            extract_pdf(b"PK\x03\x04 definitely a zip"),
            Err(IngestError::Decode { .. })
        ));
    }
}
