//! Parse completion responses into typed records
//!
//! A response is cleaned, decoded as JSON and immediately converted into a
//! [`RawRecord`]. Wrong-typed values never reach the domain: identity fields
//! become absent, scalar entry fields fall back to the placeholder, and
//! skills keep only non-blank strings.

use crate::error::ExtractorError;
use crate::prompt::{
    COMPANY_NAME_KEY, CUSTOMER_NAME_KEY, DURATION_KEY, EMAIL_KEY, FULL_NAME_KEY, INDUSTRY_KEY,
    LOCATION_KEY, PHONE_NUMBER_KEY, ROLE_KEY, SKILLS_KEY, WORK_EXPERIENCE_KEY,
};
use crate::sanitize::clean;
use serde_json::{Map, Value};
use vitae_domain::{ExtractedRecord, WorkExperience, PLACEHOLDER};

/// Decoded top-level response object
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct RawRecord {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub work_experience: Vec<RawExperience>,
}

/// Decoded work history entry; `None` scalars were missing or unusable
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct RawExperience {
    pub company_name: Option<String>,
    pub customer_name: Option<String>,
    pub role: Option<String>,
    pub duration: Option<String>,
    pub skills_technologies: Vec<String>,
    pub industry_domain: Option<String>,
    pub location: Option<String>,
}

/// Clean and decode a raw completion
///
/// Fails when the cleaned text is not JSON or its top level is not an object.
pub(crate) fn parse_response(raw: &str) -> Result<RawRecord, ExtractorError> {
    let cleaned = clean(raw);
    let value: Value = serde_json::from_str(&cleaned)?;

    match value {
        Value::Object(map) => Ok(RawRecord::from_map(&map)),
        other => Err(ExtractorError::InvalidFormat(format!(
            "Expected a JSON object, got {}",
            json_type(&other)
        ))),
    }
}

impl RawRecord {
    fn from_map(map: &Map<String, Value>) -> Self {
        let work_experience = match map.get(WORK_EXPERIENCE_KEY) {
            Some(Value::Array(entries)) => entries
                .iter()
                .filter_map(Value::as_object)
                .map(RawExperience::from_map)
                .collect(),
            _ => Vec::new(),
        };

        Self {
            full_name: identity_field(map.get(FULL_NAME_KEY)),
            email: identity_field(map.get(EMAIL_KEY)),
            phone_number: identity_field(map.get(PHONE_NUMBER_KEY)),
            work_experience,
        }
    }

    /// Map into the domain record
    pub fn into_record(self) -> ExtractedRecord {
        ExtractedRecord {
            full_name: self.full_name,
            email: self.email,
            phone_number: self.phone_number,
            work_experience: self
                .work_experience
                .into_iter()
                .map(RawExperience::into_work_experience)
                .collect(),
        }
    }
}

impl RawExperience {
    fn from_map(map: &Map<String, Value>) -> Self {
        let skills_technologies = match map.get(SKILLS_KEY) {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(Value::as_str)
                .filter(|s| !s.trim().is_empty())
                .map(str::to_string)
                .collect(),
            _ => Vec::new(),
        };

        Self {
            company_name: scalar_field(map.get(COMPANY_NAME_KEY)),
            customer_name: scalar_field(map.get(CUSTOMER_NAME_KEY)),
            role: scalar_field(map.get(ROLE_KEY)),
            duration: scalar_field(map.get(DURATION_KEY)),
            skills_technologies,
            industry_domain: scalar_field(map.get(INDUSTRY_KEY)),
            location: scalar_field(map.get(LOCATION_KEY)),
        }
    }

    /// Map into a domain entry, filling unusable scalars with the placeholder
    pub fn into_work_experience(self) -> WorkExperience {
        let or_placeholder = |v: Option<String>| v.unwrap_or_else(|| PLACEHOLDER.to_string());
        WorkExperience {
            company_name: or_placeholder(self.company_name),
            customer_name: or_placeholder(self.customer_name),
            role: or_placeholder(self.role),
            duration: or_placeholder(self.duration),
            skills_technologies: self.skills_technologies,
            industry_domain: or_placeholder(self.industry_domain),
            location: or_placeholder(self.location),
        }
    }
}

/// Identity values: strings and numbers are kept, blanks and anything else are absent
fn identity_field(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Entry scalars: strings, numbers and booleans are kept verbatim
fn scalar_field(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
