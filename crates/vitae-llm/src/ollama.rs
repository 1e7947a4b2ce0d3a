//! Ollama Provider Implementation
//!
//! Provides integration with Ollama's local completion API, for running
//! extraction against a local model instead of a hosted service.
//!
//! # Features
//!
//! - Configurable endpoint and model
//! - Retry logic with exponential backoff on transport and server errors
//! - Timeout handling
//!
//! # Examples
//!
//! ```no_run
//! use vitae_llm::OllamaProvider;
//! use vitae_domain::traits::CompletionProvider;
//!
//! let provider = OllamaProvider::new("http://localhost:11434", "llama3").unwrap();
//! let text = provider.complete("Say hello", 0.2).unwrap();
//! ```

use crate::LlmError;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};
use vitae_domain::traits::CompletionProvider;

/// Default Ollama API endpoint
pub const DEFAULT_ENDPOINT: &str = "http://localhost:11434";

/// Default timeout for completion requests (local models on long resumes are slow)
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Default number of attempts
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Ollama API provider for local inference
pub struct OllamaProvider {
    endpoint: String,
    model: String,
    client: reqwest::blocking::Client,
    max_retries: u32,
}

/// Request body for Ollama generate API
#[derive(Serialize)]
struct OllamaGenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: OllamaOptions,
}

#[derive(Serialize)]
struct OllamaOptions {
    temperature: f32,
}

/// Response from Ollama generate API
#[derive(Deserialize)]
struct OllamaGenerateResponse {
    response: String,
}

impl OllamaProvider {
    /// Create a new Ollama provider
    ///
    /// # Parameters
    ///
    /// - `endpoint`: Ollama API endpoint (e.g., "http://localhost:11434")
    /// - `model`: Model to use (e.g., "llama3", "mistral")
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>) -> Result<Self, LlmError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            model: model.into(),
            client,
            max_retries: DEFAULT_MAX_RETRIES,
        })
    }

    /// Create a new Ollama provider against `http://localhost:11434`
    pub fn default_endpoint(model: impl Into<String>) -> Result<Self, LlmError> {
        Self::new(DEFAULT_ENDPOINT, model)
    }

    /// Set the maximum number of attempts
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries.max(1);
        self
    }

    fn generate(&self, prompt: &str, temperature: f32) -> Result<String, LlmError> {
        let url = format!("{}/api/generate", self.endpoint);

        let request_body = OllamaGenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
            options: OllamaOptions { temperature },
        };

        let mut attempts = 0;
        let mut last_error = None;

        while attempts < self.max_retries {
            match self.client.post(&url).json(&request_body).send() {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        let body: OllamaGenerateResponse = response.json().map_err(|e| {
                            LlmError::InvalidResponse(format!("Failed to parse response: {}", e))
                        })?;
                        debug!("Ollama returned {} chars", body.response.len());
                        return Ok(body.response);
                    } else if status == reqwest::StatusCode::NOT_FOUND {
                        return Err(LlmError::ModelNotAvailable(self.model.clone()));
                    } else {
                        let error_text = response
                            .text()
                            .unwrap_or_else(|_| "Unknown error".to_string());
                        last_error = Some(LlmError::Api {
                            status: status.as_u16(),
                            message: error_text,
                        });
                    }
                }
                Err(e) => {
                    last_error = Some(LlmError::Communication(format!("Request failed: {}", e)));
                }
            }

            attempts += 1;
            if attempts < self.max_retries {
                // Exponential backoff: 1s, 2s, 4s, etc.
                let delay = Duration::from_secs(2u64.pow(attempts - 1));
                warn!("Ollama attempt {} failed, retrying in {:?}", attempts, delay);
                std::thread::sleep(delay);
            }
        }

        Err(last_error
            .unwrap_or_else(|| LlmError::Communication("Max retries exceeded".to_string())))
    }
}

impl CompletionProvider for OllamaProvider {
    type Error = LlmError;

    fn complete(&self, prompt: &str, temperature: f32) -> Result<String, Self::Error> {
        self.generate(prompt, temperature)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
