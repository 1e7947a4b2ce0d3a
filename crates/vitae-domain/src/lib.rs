//! Vitae Domain Layer
//!
//! This crate contains the record model produced by resume extraction and the
//! trait interfaces every other layer depends upon. It has no external
//! dependencies.
//!
//! ## Key Concepts
//!
//! - **ExtractedRecord**: identity fields plus an ordered work history, one per
//!   source document
//! - **WorkExperience**: a single past role; every scalar is either extracted
//!   content or the `"N/A"` placeholder
//! - **Identity fields**: full name, email, phone number
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Infrastructure implementations (completion providers, storage) live in
//!   other crates and plug in through [`traits`]

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod record;
pub mod traits;

// Re-exports for convenience
pub use record::{ExtractedRecord, WorkExperience, PLACEHOLDER, SKILLS_SEPARATOR};
