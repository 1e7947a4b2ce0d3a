//! Vitae Extractor
//!
//! Turns resume text into an [`ExtractedRecord`](vitae_domain::ExtractedRecord)
//! with a text-completion service.
//!
//! # Architecture
//!
//! ```text
//! Text → build_prompt → CompletionProvider → clean → RawRecord → ExtractedRecord
//!                                      │
//!                      unusable JSON   └→ head call + section batch calls
//! ```
//!
//! # Key Features
//!
//! - **Single-shot extraction**: one call over the whole resume
//! - **Chunked extraction**: head and work-history sections in separate,
//!   paced calls when the single response cannot be decoded
//! - **Typed mapping**: every work entry is fully populated, with `"N/A"`
//!   standing in for unusable values
//! - **Regex fallback**: contact details scanned from the text when the
//!   service returns no identity
//!
//! # Example Usage
//!
//! ```no_run
//! use vitae_extractor::{Extractor, ExtractorConfig};
//! use vitae_llm::MockProvider;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let llm = MockProvider::new(r#"{"Full Name": "Jane Doe", "Work Experience": []}"#);
//! let extractor = Extractor::new(llm, ExtractorConfig::default());
//!
//! let record = extractor.extract("Jane Doe\nRust developer").await?;
//! println!("Name: {:?}", record.full_name);
//! println!("Entries: {}", record.work_experience.len());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod error;
mod config;
mod prompt;
mod sanitize;
mod parser;
mod chunking;
mod rate_limit;
mod fallback;
mod extractor;


pub use error::ExtractorError;
pub use config::ExtractorConfig;
pub use prompt::{
    build_prompt, COMPANY_NAME_KEY, CUSTOMER_NAME_KEY, DURATION_KEY, EMAIL_KEY, FULL_NAME_KEY,
    INDUSTRY_KEY, LOCATION_KEY, PHONE_NUMBER_KEY, ROLE_KEY, SKILLS_KEY, WORK_EXPERIENCE_KEY,
};
pub use sanitize::clean;
pub use chunking::{batch_sections, split_sections, ChunkPlan, SectionChunker};
pub use rate_limit::{FixedDelay, NoDelay, RateLimitPolicy};
pub use fallback::{fallback_identity, scan_email, scan_phone};
pub use extractor::Extractor;
