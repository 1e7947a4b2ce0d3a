//! LLM prompt engineering for resume extraction
//!
//! The key names below are the contract between the prompt and the response
//! mapping in [`crate::parser`]; both sides read them from here.

/// Top-level key for the candidate's name
pub const FULL_NAME_KEY: &str = "Full Name";
/// Top-level key for the primary email address
pub const EMAIL_KEY: &str = "Email";
/// Top-level key for the primary phone number
pub const PHONE_NUMBER_KEY: &str = "Phone Number";
/// Top-level key for the work history array
pub const WORK_EXPERIENCE_KEY: &str = "Work Experience";

/// Per-experience key for the employer
pub const COMPANY_NAME_KEY: &str = "Company Name";
/// Per-experience key for the end client
pub const CUSTOMER_NAME_KEY: &str = "Customer Name";
/// Per-experience key for the job title
pub const ROLE_KEY: &str = "Role";
/// Per-experience key for the time span
pub const DURATION_KEY: &str = "Duration";
/// Per-experience key for the skills array
pub const SKILLS_KEY: &str = "Skills/Technologies";
/// Per-experience key for the business sector
pub const INDUSTRY_KEY: &str = "Industry/Domain";
/// Per-experience key for the work location
pub const LOCATION_KEY: &str = "Location";

/// Build the extraction prompt for a block of resume text
///
/// The text is embedded verbatim. The same function serves whole documents,
/// resume heads and section batches.
pub fn build_prompt(resume_text: &str) -> String {
    let mut prompt = String::with_capacity(resume_text.len() + 2048);

    prompt.push_str(EXTRACTION_INSTRUCTIONS);
    prompt.push_str("\n\n");

    prompt.push_str("Each object must have:\n- ");
    let entry_keys = [
        COMPANY_NAME_KEY,
        CUSTOMER_NAME_KEY,
        ROLE_KEY,
        DURATION_KEY,
        SKILLS_KEY,
        INDUSTRY_KEY,
        LOCATION_KEY,
    ];
    let quoted: Vec<String> = entry_keys.iter().map(|k| format!("\"{}\"", k)).collect();
    prompt.push_str(&quoted.join(", "));
    prompt.push_str("\n\n");

    prompt.push_str("Format must match exactly:\n");
    prompt.push_str(FULL_EXAMPLE);
    prompt.push_str("\n\n");

    prompt.push_str("If resume is invalid or unextractable:\n");
    prompt.push_str(EMPTY_EXAMPLE);
    prompt.push_str("\n\n");

    prompt.push_str("Resume Text:\n");
    prompt.push_str("---\n");
    prompt.push_str(resume_text);
    prompt.push_str("\n---\n");
    prompt.push_str("End of Resume Text. Output JSON object:\n");

    prompt
}

const EXTRACTION_INSTRUCTIONS: &str = r#"You are an expert resume data extraction system. Your sole output MUST be a single, valid JSON object.
Extract the following information from the provided resume text.

The JSON object must have these top-level keys:
1.  "Full Name": The full name of the person. If not found, use JSON null.
2.  "Email": The primary email address. If not found, use JSON null.
3.  "Phone Number": The primary phone number. If not found, use JSON null.
4.  "Work Experience": An array of objects. Each object represents a distinct work experience. If there is no work history, use an empty array []."#;

pub(crate) const FULL_EXAMPLE: &str = r#"{
  "Full Name": "Jane Doe",
  "Email": "jane@example.com",
  "Phone Number": "123-456-7890",
  "Work Experience": [
    {
      "Company Name": "Company A",
      "Customer Name": "Client X",
      "Role": "Developer",
      "Duration": "Jan 2020 - Dec 2021",
      "Skills/Technologies": ["Python", "Django"],
      "Industry/Domain": "IT",
      "Location": "Remote"
    }
  ]
}"#;

pub(crate) const EMPTY_EXAMPLE: &str = r#"{
  "Full Name": null,
  "Email": null,
  "Phone Number": null,
  "Work Experience": []
}"#;
