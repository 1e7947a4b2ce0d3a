//! Core Extractor implementation

use crate::chunking::SectionChunker;
use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::parser::parse_response;
use crate::prompt::build_prompt;
use crate::rate_limit::{FixedDelay, RateLimitPolicy};
use std::sync::Arc;
use tokio::time::timeout;
use tracing::{debug, info, warn};
use vitae_domain::traits::CompletionProvider;
use vitae_domain::ExtractedRecord;

/// The Extractor converts resume text into an [`ExtractedRecord`]
pub struct Extractor<L>
where
    L: CompletionProvider,
{
    llm_provider: Arc<L>,
    config: ExtractorConfig,
    rate_limit: Box<dyn RateLimitPolicy>,
}

impl<L> Extractor<L>
where
    L: CompletionProvider + Send + Sync + 'static,
    L::Error: std::fmt::Display,
{
    /// Create a new Extractor
    ///
    /// Chunk calls are paced with a fixed delay taken from the config.
    pub fn new(llm_provider: L, config: ExtractorConfig) -> Self {
        let rate_limit = Box::new(FixedDelay(config.inter_chunk_delay()));
        Self {
            llm_provider: Arc::new(llm_provider),
            config,
            rate_limit,
        }
    }

    /// Replace the pacing policy for chunk calls
    pub fn with_rate_limit(mut self, policy: impl RateLimitPolicy + 'static) -> Self {
        self.rate_limit = Box::new(policy);
        self
    }

    /// The active configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract a record from the whole text in one call
    ///
    /// If the response cannot be decoded, the entire text is re-processed
    /// with [`Extractor::extract_chunked`] and that result is returned.
    /// Completion-service failures are returned as errors.
    pub async fn extract(&self, text: &str) -> Result<ExtractedRecord, ExtractorError> {
        if text.trim().is_empty() {
            debug!("Empty text, skipping completion");
            return Ok(ExtractedRecord::empty());
        }

        info!(
            "Starting single-shot extraction with {}, text length {}",
            self.llm_provider.model_name(),
            text.len()
        );

        let response = self.call_llm(&build_prompt(text)).await?;

        match parse_response(&response) {
            Ok(parsed) => {
                let record = parsed.into_record();
                info!(
                    "Single-shot extraction found {} work experience entries",
                    record.work_experience.len()
                );
                Ok(record)
            }
            Err(e) => {
                warn!("Single-shot response unusable ({}), switching to chunked extraction", e);
                self.extract_chunked(text).await
            }
        }
    }

    /// Extract a record with one call for the head and one per section batch
    ///
    /// A head response that cannot be decoded yields the empty record. Batch
    /// responses that cannot be decoded are skipped.
    pub async fn extract_chunked(&self, text: &str) -> Result<ExtractedRecord, ExtractorError> {
        if text.trim().is_empty() {
            debug!("Empty text, skipping completion");
            return Ok(ExtractedRecord::empty());
        }

        let plan = SectionChunker::new(self.config.chunk_size).plan(text);
        info!(
            "Chunked extraction: head of {} chars, {} section batches",
            plan.head.len(),
            plan.batches.len()
        );

        let head_response = self.call_llm(&build_prompt(&plan.head)).await?;
        let head = match parse_response(&head_response) {
            Ok(head) => head,
            Err(e) => {
                warn!("Head response unusable ({}), returning empty record", e);
                return Ok(ExtractedRecord::empty());
            }
        };

        let mut work_experience = Vec::new();
        let total = plan.batches.len();

        for (idx, batch) in plan.batches.iter().enumerate() {
            let delay = self.rate_limit.delay_before(idx);
            if !delay.is_zero() {
                debug!("Waiting {:?} before batch {}/{}", delay, idx + 1, total);
                tokio::time::sleep(delay).await;
            }

            debug!("Processing batch {}/{}", idx + 1, total);
            let response = self.call_llm(&build_prompt(batch)).await?;

            match parse_response(&response) {
                Ok(parsed) => {
                    let entries = parsed.into_record().work_experience;
                    debug!("Batch {}/{} yielded {} entries", idx + 1, total, entries.len());
                    work_experience.extend(entries);
                }
                Err(e) => warn!("Skipping batch {}/{}: {}", idx + 1, total, e),
            }
        }

        let identity = head.into_record();
        info!(
            "Chunked extraction complete: {} work experience entries",
            work_experience.len()
        );

        Ok(ExtractedRecord {
            full_name: identity.full_name,
            email: identity.email,
            phone_number: identity.phone_number,
            work_experience,
        })
    }

    /// Call the completion provider under the configured timeout
    async fn call_llm(&self, prompt: &str) -> Result<String, ExtractorError> {
        let llm = Arc::clone(&self.llm_provider);
        let prompt = prompt.to_string();
        let temperature = self.config.temperature;

        debug!("Prompt length: {} chars", prompt.len());

        // Call in a blocking context since CompletionProvider is not async
        let task = tokio::task::spawn_blocking(move || {
            llm.complete(&prompt, temperature)
                .map_err(|e| ExtractorError::Llm(e.to_string()))
        });

        let response = timeout(self.config.extraction_timeout(), task)
            .await
            .map_err(|_| ExtractorError::Timeout)?
            .map_err(|e| ExtractorError::Llm(format!("Task join error: {}", e)))??;

        debug!("LLM response length: {} chars", response.len());
        Ok(response)
    }
}
