//! Record module - the canonical output of resume extraction

/// Value stored in a work-experience field the completion service left out.
pub const PLACEHOLDER: &str = "N/A";

/// Separator used whenever a skills list is flattened into a single string.
pub const SKILLS_SEPARATOR: &str = ", ";

/// One past role from a person's work history.
///
/// All six scalar fields are always populated, either with extracted content
/// or with [`PLACEHOLDER`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkExperience {
    /// Employer
    pub company_name: String,

    /// End customer or client the work was done for
    pub customer_name: String,

    /// Job title
    pub role: String,

    /// Free-form period, e.g. "Jan 2020 - Dec 2021"
    pub duration: String,

    /// Skills and technologies in order of appearance (no duplicates removed)
    pub skills_technologies: Vec<String>,

    /// Industry or business domain
    pub industry_domain: String,

    /// Work location
    pub location: String,
}

impl WorkExperience {
    /// A work experience with every scalar set to the placeholder and no skills.
    pub fn placeholder() -> Self {
        Self {
            company_name: PLACEHOLDER.to_string(),
            customer_name: PLACEHOLDER.to_string(),
            role: PLACEHOLDER.to_string(),
            duration: PLACEHOLDER.to_string(),
            skills_technologies: Vec::new(),
            industry_domain: PLACEHOLDER.to_string(),
            location: PLACEHOLDER.to_string(),
        }
    }

    /// Skills flattened for storage and export.
    ///
    /// # Examples
    ///
    /// ```
    /// use vitae_domain::WorkExperience;
    ///
    /// let mut exp = WorkExperience::placeholder();
    /// exp.skills_technologies = vec!["Rust".into(), "SQL".into()];
    /// assert_eq!(exp.joined_skills(), "Rust, SQL");
    /// ```
    pub fn joined_skills(&self) -> String {
        self.skills_technologies.join(SKILLS_SEPARATOR)
    }
}

/// Structured identity and work history extracted from one document.
///
/// Records are built once per document and never edited in place; steps that
/// refine a record consume it and return a new one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedRecord {
    /// Person's full name
    pub full_name: Option<String>,

    /// Primary email address
    pub email: Option<String>,

    /// Primary phone number
    pub phone_number: Option<String>,

    /// Work history in order of appearance
    pub work_experience: Vec<WorkExperience>,
}

impl ExtractedRecord {
    /// The record produced for empty input or an unrecoverable response.
    pub fn empty() -> Self {
        Self::default()
    }

    /// True when full name, email and phone number are all absent or blank.
    ///
    /// # Examples
    ///
    /// ```
    /// use vitae_domain::ExtractedRecord;
    ///
    /// let mut record = ExtractedRecord::empty();
    /// assert!(record.is_identity_empty());
    ///
    /// record.email = Some("a@b.com".into());
    /// assert!(!record.is_identity_empty());
    /// ```
    pub fn is_identity_empty(&self) -> bool {
        [&self.full_name, &self.email, &self.phone_number]
            .iter()
            .all(|field| is_blank(field))
    }

    /// Fill blank email and phone fields from a heuristic scan.
    ///
    /// Only fields that are currently blank are replaced, so a field never
    /// mixes completion output with scanned output.
    pub fn with_fallback_identity(self, email: Option<String>, phone_number: Option<String>) -> Self {
        let email = if is_blank(&self.email) { email } else { self.email };
        let phone_number = if is_blank(&self.phone_number) {
            phone_number
        } else {
            self.phone_number
        };

        Self {
            email,
            phone_number,
            ..self
        }
    }

    /// True when nothing at all was extracted.
    pub fn is_empty(&self) -> bool {
        self.is_identity_empty() && self.work_experience.is_empty()
    }
}

fn is_blank(field: &Option<String>) -> bool {
    field.as_deref().map_or(true, |s| s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_experience_has_every_field_set() {
        let exp = WorkExperience::placeholder();
        assert_eq!(exp.company_name, "N/A");
        assert_eq!(exp.customer_name, "N/A");
        assert_eq!(exp.role, "N/A");
        assert_eq!(exp.duration, "N/A");
        assert_eq!(exp.industry_domain, "N/A");
        assert_eq!(exp.location, "N/A");
        assert!(exp.skills_technologies.is_empty());
        assert_eq!(exp.joined_skills(), "");
    }

    #[test]
    fn test_empty_record() {
        let record = ExtractedRecord::empty();
        assert!(record.is_empty());
        assert!(record.is_identity_empty());
    }

    #[test]
    fn test_blank_strings_count_as_empty_identity() {
        let record = ExtractedRecord {
            full_name: Some("   ".to_string()),
            email: Some(String::new()),
            phone_number: None,
            work_experience: vec![],
        };
        assert!(record.is_identity_empty());
    }

    #[test]
    fn test_name_alone_is_enough_identity() {
        let record = ExtractedRecord {
            full_name: Some("Jane Doe".to_string()),
            ..Default::default()
        };
        assert!(!record.is_identity_empty());
    }

    #[test]
    fn test_fallback_fills_only_blank_fields() {
        let record = ExtractedRecord {
            full_name: None,
            email: Some("kept@example.com".to_string()),
            phone_number: None,
            work_experience: vec![WorkExperience::placeholder()],
        };

        let merged = record.with_fallback_identity(
            Some("scanned@example.com".to_string()),
            Some("555-123-4567".to_string()),
        );

        assert_eq!(merged.email.as_deref(), Some("kept@example.com"));
        assert_eq!(merged.phone_number.as_deref(), Some("555-123-4567"));
        assert_eq!(merged.full_name, None);
        assert_eq!(merged.work_experience.len(), 1);
    }

    #[test]
    fn test_fallback_replaces_blank_string() {
        let record = ExtractedRecord {
            email: Some(" ".to_string()),
            ..Default::default()
        };
        let merged = record.with_fallback_identity(Some("a@b.com".to_string()), None);
        assert_eq!(merged.email.as_deref(), Some("a@b.com"));
        assert_eq!(merged.phone_number, None);
    }
}
