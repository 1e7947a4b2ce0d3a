//! Tabular export of processed resumes.
//!
//! One row per document: identity columns, then seven columns per work
//! history entry. Rows with fewer entries are padded with empty cells.

use std::fs;
use std::io;
use std::path::Path;
use vitae_domain::ExtractedRecord;

/// Leading columns of every row
pub const BASE_COLUMNS: [&str; 4] = ["File Name", "Full Name", "Email", "Phone Number"];

/// Per-entry column prefixes, suffixed with the 1-based entry index
pub const EXPERIENCE_COLUMNS: [&str; 7] = [
    "Company", "Customer", "Role", "Duration", "Skills", "Industry", "Location",
];

/// One exported document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRow {
    /// Source file name
    pub file_name: String,
    /// Extracted name, empty when absent
    pub full_name: String,
    /// Extracted email, empty when absent
    pub email: String,
    /// Extracted phone number, empty when absent
    pub phone_number: String,
    /// Seven cells per work history entry, in entry order
    pub experiences: Vec<[String; 7]>,
}

impl ExportRow {
    /// Flatten a record into a row.
    pub fn from_record(file_name: &str, record: &ExtractedRecord) -> Self {
        let experiences = record
            .work_experience
            .iter()
            .map(|e| {
                [
                    e.company_name.clone(),
                    e.customer_name.clone(),
                    e.role.clone(),
                    e.duration.clone(),
                    e.joined_skills(),
                    e.industry_domain.clone(),
                    e.location.clone(),
                ]
            })
            .collect();

        Self {
            file_name: file_name.to_string(),
            full_name: record.full_name.clone().unwrap_or_default(),
            email: record.email.clone().unwrap_or_default(),
            phone_number: record.phone_number.clone().unwrap_or_default(),
            experiences,
        }
    }

    /// Cells of this row, padded to `experience_slots` entries.
    pub fn cells(&self, experience_slots: usize) -> Vec<String> {
        let mut cells = vec![
            self.file_name.clone(),
            self.full_name.clone(),
            self.email.clone(),
            self.phone_number.clone(),
        ];
        for slot in 0..experience_slots {
            match self.experiences.get(slot) {
                Some(entry) => cells.extend(entry.iter().cloned()),
                None => cells.extend(std::iter::repeat(String::new()).take(EXPERIENCE_COLUMNS.len())),
            }
        }
        cells
    }
}

/// Header for rows with at most `experience_slots` entries.
pub fn header(experience_slots: usize) -> Vec<String> {
    let mut columns: Vec<String> = BASE_COLUMNS.iter().map(|c| c.to_string()).collect();
    for i in 1..=experience_slots {
        columns.extend(EXPERIENCE_COLUMNS.iter().map(|c| format!("{} {}", c, i)));
    }
    columns
}

/// Render rows as CSV text, header first.
pub fn render_csv(rows: &[ExportRow]) -> String {
    let slots = rows.iter().map(|r| r.experiences.len()).max().unwrap_or(0);

    let mut out = String::new();
    push_line(&mut out, &header(slots));
    for row in rows {
        push_line(&mut out, &row.cells(slots));
    }
    out
}

/// Write rows to `path`. Returns `false` without touching the file when there are no rows.
pub fn write_csv(path: impl AsRef<Path>, rows: &[ExportRow]) -> io::Result<bool> {
    if rows.is_empty() {
        return Ok(false);
    }
    fs::write(path, render_csv(rows))?;
    Ok(true)
}

fn push_line(out: &mut String, cells: &[String]) {
    let escaped: Vec<String> = cells.iter().map(|c| csv_escape(c)).collect();
    out.push_str(&escaped.join(","));
    out.push('\n');
}

fn csv_escape(s: &str) -> String {
    if s.contains('"') || s.contains(',') || s.contains('\n') || s.contains('\r') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitae_domain::WorkExperience;

    fn entry(company: &str) -> WorkExperience {
        WorkExperience {
            company_name: company.to_string(),
            skills_technologies: vec!["Rust".into(), "SQL".into()],
            ..WorkExperience::placeholder()
        }
    }

    fn record(entries: usize) -> ExtractedRecord {
        ExtractedRecord {
            full_name: Some("Jane Doe".into()),
            email: None,
            phone_number: Some("555-0100".into()),
            work_experience: (0..entries).map(|i| entry(&format!("Co{}", i + 1))).collect(),
        }
    }

    #[test]
    fn test_header_columns() {
        let h = header(2);
        assert_eq!(h.len(), 4 + 14);
        assert_eq!(&h[..5], &["File Name", "Full Name", "Email", "Phone Number", "Company 1"]);
        assert_eq!(h[10], "Location 1");
        assert_eq!(h[11], "Company 2");
        assert_eq!(h[15], "Skills 2");
    }

    #[test]
    fn test_row_cells() {
        let row = ExportRow::from_record("jane.pdf", &record(1));
        let cells = row.cells(1);
        assert_eq!(cells[0], "jane.pdf");
        assert_eq!(cells[2], "");
        assert_eq!(cells[4], "Co1");
        assert_eq!(cells[5], "N/A");
        assert_eq!(cells[8], "Rust, SQL");
    }

    #[test]
    fn test_header_is_union_and_short_rows_are_padded() {
        let rows = vec![
            ExportRow::from_record("a.pdf", &record(1)),
            ExportRow::from_record("b.docx", &record(3)),
            ExportRow::from_record("c.doc", &record(0)),
        ];
        let csv = render_csv(&rows);
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].ends_with("Location 3"));
        // Each filled entry adds one comma inside its quoted skills cell
        let widths: Vec<usize> = lines.iter().map(|l| l.matches(',').count()).collect();
        assert_eq!(widths[0], 4 + 21 - 1);
        assert_eq!(widths[3], widths[0]);
        assert!(lines[3].starts_with("c.doc,Jane Doe,,555-0100,,,"));
    }

    #[test]
    fn test_csv_escape() {
        assert_eq!(csv_escape("plain"), "plain");
        assert_eq!(csv_escape("Rust, SQL"), "\"Rust, SQL\"");
        assert_eq!(csv_escape("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(csv_escape("two\nlines"), "\"two\nlines\"");
    }

    #[test]
    fn test_no_rows_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        assert!(!write_csv(&path, &[]).unwrap());
        assert!(!path.exists());
    }

    #[test]
    fn test_write_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let rows = vec![ExportRow::from_record("a.pdf", &record(1))];

        assert!(write_csv(&path, &rows).unwrap());
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("File Name,Full Name,Email,Phone Number,Company 1,"));
        assert!(contents.contains("a.pdf,Jane Doe,,555-0100,Co1,N/A,N/A,N/A,\"Rust, SQL\",N/A,N/A\n"));
    }
}
