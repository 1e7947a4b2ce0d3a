//! Cohere Provider Implementation
//!
//! Calls Cohere's generate endpoint. Requests carry the configured
//! temperature and a 120-second ceiling; there is no retry here because the
//! extractor owns the pacing between calls.

use crate::LlmError;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;
use vitae_domain::traits::CompletionProvider;

/// Default Cohere API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.cohere.ai/v1/generate";

/// Default generation model
pub const DEFAULT_MODEL: &str = "command-r-plus";

/// Timeout for a single generate request
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Upper bound on generated tokens; a full resume record fits comfortably
pub const DEFAULT_MAX_TOKENS: u32 = 4096;

/// Cohere generate API provider
pub struct CohereProvider {
    endpoint: String,
    model: String,
    api_key: String,
    max_tokens: u32,
    client: reqwest::blocking::Client,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    generations: Vec<Generation>,
}

#[derive(Deserialize)]
struct Generation {
    text: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

impl CohereProvider {
    /// Create a provider for the default model and endpoint
    pub fn new(api_key: impl Into<String>) -> Result<Self, LlmError> {
        Self::with_timeout(api_key, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a provider with a custom HTTP timeout
    pub fn with_timeout(api_key: impl Into<String>, timeout: Duration) -> Result<Self, LlmError> {
        let client = reqwest::blocking::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: api_key.into(),
            max_tokens: DEFAULT_MAX_TOKENS,
            client,
        })
    }

    /// Use a different model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Use a different endpoint (proxies, test servers)
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    fn request_body<'a>(&'a self, prompt: &'a str, temperature: f32) -> GenerateRequest<'a> {
        GenerateRequest {
            model: &self.model,
            prompt,
            temperature,
            max_tokens: self.max_tokens,
        }
    }
}

impl CompletionProvider for CohereProvider {
    type Error = LlmError;

    fn complete(&self, prompt: &str, temperature: f32) -> Result<String, Self::Error> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&self.request_body(prompt, temperature))
            .send()?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(LlmError::RateLimitExceeded);
        }
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|e| e.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: GenerateResponse = response
            .json()
            .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        let text = first_generation(body)?;
        debug!("Cohere returned {} chars", text.len());
        Ok(text)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

fn first_generation(body: GenerateResponse) -> Result<String, LlmError> {
    body.generations
        .into_iter()
        .next()
        .map(|g| g.text)
        .ok_or_else(|| LlmError::InvalidResponse("Response contained no generations".to_string()))
}
