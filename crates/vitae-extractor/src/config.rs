//! Configuration for the Extractor

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Upper bound accepted for the sampling temperature
pub const MAX_TEMPERATURE: f32 = 5.0;

/// Configuration for the Extractor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Sampling temperature for every completion call
    pub temperature: f32,

    /// Maximum number of resume sections sent in one chunked call
    pub chunk_size: usize,

    /// Pause before each chunk call (seconds)
    pub inter_chunk_delay_secs: u64,

    /// Maximum time for a single completion call (seconds)
    pub extraction_timeout_secs: u64,
}

impl ExtractorConfig {
    /// Get the extraction timeout as a Duration
    pub fn extraction_timeout(&self) -> Duration {
        Duration::from_secs(self.extraction_timeout_secs)
    }

    /// Get the inter-chunk delay as a Duration
    pub fn inter_chunk_delay(&self) -> Duration {
        Duration::from_secs(self.inter_chunk_delay_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.chunk_size == 0 {
            return Err("chunk_size must be greater than 0".to_string());
        }
        if self.extraction_timeout_secs == 0 {
            return Err("extraction_timeout_secs must be greater than 0".to_string());
        }
        if !(0.0..=MAX_TEMPERATURE).contains(&self.temperature) {
            return Err(format!(
                "temperature must be between 0 and {}, got {}",
                MAX_TEMPERATURE, self.temperature
            ));
        }
        Ok(())
    }
}

impl Default for ExtractorConfig {
    /// Settings tuned for a rate-limited hosted completion service
    fn default() -> Self {
        Self {
            temperature: 0.2,
            chunk_size: 5,
            inter_chunk_delay_secs: 5,
            extraction_timeout_secs: 120,
        }
    }
}

impl ExtractorConfig {
    /// Fast preset: no pause between chunk calls, for local models
    pub fn fast() -> Self {
        Self {
            inter_chunk_delay_secs: 0,
            ..Self::default()
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str)
            .map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}
