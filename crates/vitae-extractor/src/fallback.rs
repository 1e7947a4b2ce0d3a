//! Regex fallback for contact details
//!
//! Used only when the completion service returned no identity at all. The
//! name is never guessed.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\w.-]+@[\w.-]+\.\w+").unwrap());

static PHONE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\+?\d[\d\-() ]{7,}\d").unwrap());

/// First email-like match, scanning lines in order
pub fn scan_email(lines: &[String]) -> Option<String> {
    first_match(&EMAIL, lines)
}

/// First phone-like match, scanning lines in order
pub fn scan_phone(lines: &[String]) -> Option<String> {
    first_match(&PHONE, lines)
}

/// Scan lines for `(email, phone)`
///
/// ```
/// use vitae_extractor::fallback_identity;
///
/// let lines = vec!["Jane Doe".to_string(), "Mail: jane@example.com | +1 (555) 123-4567".to_string()];
/// let (email, phone) = fallback_identity(&lines);
/// assert_eq!(email.as_deref(), Some("jane@example.com"));
/// assert_eq!(phone.as_deref(), Some("+1 (555) 123-4567"));
/// ```
pub fn fallback_identity(lines: &[String]) -> (Option<String>, Option<String>) {
    (scan_email(lines), scan_phone(lines))
}

fn first_match(pattern: &Regex, lines: &[String]) -> Option<String> {
    lines
        .iter()
        .find_map(|line| pattern.find(line).map(|m| m.as_str().to_string()))
}
