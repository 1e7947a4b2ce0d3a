//! Section-based chunking for long resumes
//!
//! Resumes are split where a work-history heading starts a new line. The
//! first segment (contact details, summary) is the head; every segment,
//! head included, is also a candidate for the batched history calls.

use once_cell::sync::Lazy;
use regex::Regex;

/// A newline immediately followed by a work-history heading
static SECTION_BOUNDARY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\n(?:Experience|Work History|Work Experience|Professional Experience|Employment History|Professional Background)",
    )
    .unwrap()
});

/// Split text at work-history headings
///
/// The newline before each heading is consumed; the heading stays at the
/// start of its segment. Text without headings yields a single segment.
pub fn split_sections(text: &str) -> Vec<&str> {
    let mut sections = Vec::new();
    let mut start = 0;

    for boundary in SECTION_BOUNDARY.find_iter(text) {
        sections.push(&text[start..boundary.start()]);
        // Skip the one-byte '\n'
        start = boundary.start() + 1;
    }
    sections.push(&text[start..]);

    sections
}

/// Group consecutive sections into batches of at most `chunk_size`, joined by newlines
pub fn batch_sections(sections: &[&str], chunk_size: usize) -> Vec<String> {
    sections
        .chunks(chunk_size.max(1))
        .map(|batch| batch.join("\n"))
        .collect()
}

/// The calls a chunked extraction will make, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkPlan {
    /// Text before the first heading; the only source of identity fields
    pub head: String,
    /// Section batches, each sent in its own call
    pub batches: Vec<String>,
}

/// Plans chunked extraction calls
#[derive(Debug, Clone, Copy)]
pub struct SectionChunker {
    chunk_size: usize,
}

impl SectionChunker {
    /// Create a new section chunker
    pub fn new(chunk_size: usize) -> Self {
        Self {
            chunk_size: chunk_size.max(1),
        }
    }

    /// Split and batch the given text
    pub fn plan(&self, text: &str) -> ChunkPlan {
        let sections = split_sections(text);
        ChunkPlan {
            head: sections[0].to_string(),
            batches: batch_sections(&sections, self.chunk_size),
        }
    }
}
