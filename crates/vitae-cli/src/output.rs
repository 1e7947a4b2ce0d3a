//! Output formatting for the CLI.

use crate::pipeline::{BatchReport, DocumentOutcome};
use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(color_enabled: bool) -> Self {
        Self { color_enabled }
    }

    /// One progress line per document.
    pub fn document_line(&self, outcome: &DocumentOutcome) -> String {
        match outcome {
            DocumentOutcome::Processed {
                file_name,
                work_experience,
                used_fallback,
            } => {
                let suffix = if *used_fallback { ", contact details from text" } else { "" };
                self.success(&format!(
                    "{}: {} work experience entr{}{}",
                    file_name,
                    work_experience,
                    if *work_experience == 1 { "y" } else { "ies" },
                    suffix
                ))
            }
            DocumentOutcome::Failed { file_name, reason } => {
                self.error(&format!("{}: {}", file_name, reason))
            }
        }
    }

    /// Summary table of a batch.
    pub fn summary_table(&self, report: &BatchReport) -> String {
        if report.outcomes.is_empty() {
            return self.colorize("No resumes found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["File", "Status", "Details"]);

        for outcome in &report.outcomes {
            match outcome {
                DocumentOutcome::Processed {
                    file_name,
                    work_experience,
                    ..
                } => {
                    builder.push_record([
                        file_name.as_str(),
                        "processed",
                        &format!("{} entries", work_experience),
                    ]);
                }
                DocumentOutcome::Failed { file_name, reason } => {
                    builder.push_record([file_name.as_str(), "failed", reason.as_str()]);
                }
            }
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        format!(
            "{}\n{} processed, {} failed",
            table,
            report.succeeded(),
            report.failed()
        )
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> BatchReport {
        BatchReport {
            rows: Vec::new(),
            outcomes: vec![
                DocumentOutcome::Processed {
                    file_name: "a.pdf".into(),
                    work_experience: 1,
                    used_fallback: true,
                },
                DocumentOutcome::Failed {
                    file_name: "b.docx".into(),
                    reason: "Failed to decode docx document: invalid zip".into(),
                },
            ],
        }
    }

    #[test]
    fn test_document_lines() {
        let formatter = Formatter::new(false);
        let outcomes = report().outcomes;
        assert_eq!(
            formatter.document_line(&outcomes[0]),
            "✓ a.pdf: 1 work experience entry, contact details from text"
        );
        assert!(formatter.document_line(&outcomes[1]).starts_with("✗ b.docx: Failed to decode"));
    }

    #[test]
    fn test_summary_table() {
        let formatter = Formatter::new(false);
        let output = formatter.summary_table(&report());
        assert!(output.contains("Status"));
        assert!(output.contains("a.pdf"));
        assert!(output.contains("failed"));
        assert!(output.ends_with("1 processed, 1 failed"));
    }

    #[test]
    fn test_empty_report() {
        let formatter = Formatter::new(false);
        let output = formatter.summary_table(&BatchReport::default());
        assert!(output.contains("No resumes found"));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(false);
        assert_eq!(formatter.success("test"), "✓ test");
        assert_eq!(formatter.warning("test"), "⚠ test");
        assert_eq!(formatter.info("test"), "ℹ test");
    }
}
