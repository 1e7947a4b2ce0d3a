//! DOCX body text extraction
//!
//! Walks `word/document.xml` in document order. Paragraphs outside tables
//! become one line each; each table row becomes one line of cell texts joined
//! with `" | "`, which keeps tabular resumes (skills grids, project tables)
//! readable for the completion service.

use crate::{decode_error, DocumentFormat, IngestError};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::{Cursor, Read};

const DOCUMENT_PART: &str = "word/document.xml";
const CELL_SEPARATOR: &str = " | ";

pub(crate) fn extract_docx(bytes: &[u8]) -> Result<String, IngestError> {
    let mut archive =
        zip::ZipArchive::new(Cursor::new(bytes)).map_err(|e| decode_error(DocumentFormat::Docx, e))?;

    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| decode_error(DocumentFormat::Docx, e))?
        .read_to_string(&mut xml)
        .map_err(|e| decode_error(DocumentFormat::Docx, e))?;

    body_text(&xml)
}

/// Accumulates lines while walking the document body
#[derive(Default)]
struct BodyWalker {
    lines: Vec<String>,
    paragraph: String,
    cell: String,
    row: Vec<String>,
    table_depth: usize,
    in_text: bool,
}

impl BodyWalker {
    fn end_paragraph(&mut self) {
        let text = std::mem::take(&mut self.paragraph);
        let text = text.trim();
        if text.is_empty() {
            return;
        }

        if self.table_depth > 0 {
            if !self.cell.is_empty() {
                self.cell.push('\n');
            }
            self.cell.push_str(text);
        } else {
            self.lines.push(text.to_string());
        }
    }

    fn end_cell(&mut self) {
        let cell = std::mem::take(&mut self.cell);
        self.row.push(cell.trim().to_string());
    }

    fn end_row(&mut self) {
        let cells = std::mem::take(&mut self.row);
        if !cells.is_empty() {
            self.lines.push(cells.join(CELL_SEPARATOR));
        }
    }
}

fn body_text(xml: &str) -> Result<String, IngestError> {
    let mut reader = Reader::from_str(xml);
    let mut walker = BodyWalker::default();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"w:tbl" => walker.table_depth += 1,
                b"w:t" => walker.in_text = true,
                _ => {}
            },
            Ok(Event::Empty(e)) => match e.name().as_ref() {
                b"w:tab" => walker.paragraph.push('\t'),
                b"w:br" | b"w:cr" => walker.paragraph.push('\n'),
                _ => {}
            },
            Ok(Event::Text(t)) if walker.in_text => {
                let text = t
                    .unescape()
                    .map_err(|e| decode_error(DocumentFormat::Docx, e))?;
                walker.paragraph.push_str(&text);
            }
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:t" => walker.in_text = false,
                b"w:p" => walker.end_paragraph(),
                b"w:tc" => walker.end_cell(),
                b"w:tr" => walker.end_row(),
                b"w:tbl" => walker.table_depth = walker.table_depth.saturating_sub(1),
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(decode_error(DocumentFormat::Docx, e)),
            _ => {}
        }
    }

    Ok(walker.lines.join("\n"))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    /// Wrap body XML into a minimal DOCX container
    pub(crate) fn docx_bytes(body: &str) -> Vec<u8> {
        let xml = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{body}</w:body></w:document>"#
        );
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file(DOCUMENT_PART, SimpleFileOptions::default())
            .unwrap();
        writer.write_all(xml.as_bytes()).unwrap();
        writer.finish().unwrap().into_inner()
    }

    fn para(text: &str) -> String {
        format!(r#"<w:p><w:r><w:t xml:space="preserve">{text}</w:t></w:r></w:p>"#)
    }

    #[test]
    fn test_paragraphs_become_lines() {
        let body = format!("{}{}{}", para("Jane Doe"), para("   "), para(" jane@example.com "));
        let text = extract_docx(&docx_bytes(&body)).unwrap();
        assert_eq!(text, "Jane Doe\njane@example.com");
    }

    #[test]
    fn test_runs_are_concatenated() {
        let body = r#"<w:p><w:r><w:t>Senior </w:t></w:r><w:r><w:t>Engineer</w:t></w:r></w:p>"#;
        let text = extract_docx(&docx_bytes(body)).unwrap();
        assert_eq!(text, "Senior Engineer");
    }

    #[test]
    fn test_table_rows_are_pipe_joined_in_body_order() {
        let body = format!(
            "{}<w:tbl><w:tr><w:tc>{}</w:tc><w:tc>{}</w:tc></w:tr><w:tr><w:tc>{}</w:tc><w:tc>{}</w:tc></w:tr></w:tbl>{}",
            para("Skills"),
            para("Languages"),
            para("Rust, Go"),
            para("Databases"),
            para("Postgres"),
            para("Experience"),
        );
        let text = extract_docx(&docx_bytes(&body)).unwrap();
        assert_eq!(
            text,
            "Skills\nLanguages | Rust, Go\nDatabases | Postgres\nExperience"
        );
    }

    #[test]
    fn test_escaped_entities_are_unescaped() {
        let text = extract_docx(&docx_bytes(&para("R&amp;D Lead"))).unwrap();
        assert_eq!(text, "R&D Lead");
    }

    #[test]
    fn test_tabs_and_breaks() {
        let body = r#"<w:p><w:r><w:t>2019</w:t><w:tab/><w:t>Acme</w:t><w:br/><w:t>Remote</w:t></w:r></w:p>"#;
        let text = extract_docx(&docx_bytes(body)).unwrap();
        assert_eq!(text, "2019\tAcme\nRemote");
    }

    #[test]
    fn test_missing_document_part() {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("other.xml", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(b"<x/>").unwrap();
        let bytes = writer.finish().unwrap().into_inner();

        assert!(matches!(
            extract_docx(&bytes),
            Err(IngestError::Decode { format: DocumentFormat::Docx, .. })
        ));
    }
}
