//! Vitae Completion Provider Layer
//!
//! Pluggable text-completion providers behind the `CompletionProvider` trait
//! from `vitae-domain`.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic mock for testing
//! - `CohereProvider`: Cohere generate API (the default for batch runs)
//! - `OllamaProvider`: Local Ollama API integration
//!
//! # Examples
//!
//! ```
//! use vitae_llm::MockProvider;
//! use vitae_domain::traits::CompletionProvider;
//!
//! let provider = MockProvider::new("Hello from LLM!");
//! let result = provider.complete("test prompt", 0.2).unwrap();
//! assert_eq!(result, "Hello from LLM!");
//! ```

#![warn(missing_docs)]

pub mod cohere;
pub mod ollama;

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use thiserror::Error;
use vitae_domain::traits::CompletionProvider;

pub use cohere::CohereProvider;
pub use ollama::OllamaProvider;

/// Errors that can occur during completion calls
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or transport error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Service answered with a non-success status
    #[error("API error (status {status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Body or error message returned by the service
        message: String,
    },

    /// Response body did not have the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

impl From<reqwest::Error> for LlmError {
    fn from(e: reqwest::Error) -> Self {
        LlmError::Communication(e.to_string())
    }
}

#[derive(Debug, Clone)]
enum MockReply {
    Text(String),
    Error,
}

/// Mock completion provider for deterministic testing
///
/// Replies are chosen in this order: the next scripted reply (see
/// [`MockProvider::push_reply`]), then a reply registered for the exact
/// prompt, then the default response. No network calls are made.
///
/// # Examples
///
/// ```
/// use vitae_llm::MockProvider;
/// use vitae_domain::traits::CompletionProvider;
///
/// // Simple fixed response
/// let provider = MockProvider::new("Fixed response");
/// assert_eq!(provider.complete("any prompt", 0.2).unwrap(), "Fixed response");
///
/// // Per-prompt responses
/// let provider = MockProvider::default();
/// provider.add_response("prompt1", "response1");
/// provider.add_response("prompt2", "response2");
/// assert_eq!(provider.complete("prompt1", 0.2).unwrap(), "response1");
/// assert_eq!(provider.complete("prompt2", 0.2).unwrap(), "response2");
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: String,
    responses: Arc<Mutex<HashMap<String, MockReply>>>,
    script: Arc<Mutex<VecDeque<MockReply>>>,
    prompts: Arc<Mutex<Vec<String>>>,
    temperatures: Arc<Mutex<Vec<f32>>>,
}

impl MockProvider {
    /// Create a new MockProvider with a fixed response for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            responses: Arc::new(Mutex::new(HashMap::new())),
            script: Arc::new(Mutex::new(VecDeque::new())),
            prompts: Arc::new(Mutex::new(Vec::new())),
            temperatures: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a provider that answers with `replies` in order, then the default
    pub fn with_script<I, S>(default_response: impl Into<String>, replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let provider = Self::new(default_response);
        for reply in replies {
            provider.push_reply(reply);
        }
        provider
    }

    /// Add a specific response for a given prompt
    pub fn add_response(&self, prompt: impl Into<String>, response: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(prompt.into(), MockReply::Text(response.into()));
    }

    /// Configure to return an error for a specific prompt
    pub fn add_error(&self, prompt: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(prompt.into(), MockReply::Error);
    }

    /// Queue a reply returned by the next call, regardless of prompt
    pub fn push_reply(&self, response: impl Into<String>) {
        self.script
            .lock()
            .unwrap()
            .push_back(MockReply::Text(response.into()));
    }

    /// Queue an error returned by the next call, regardless of prompt
    pub fn push_error(&self) {
        self.script.lock().unwrap().push_back(MockReply::Error);
    }

    /// Get the number of times complete was called
    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    /// Prompts received so far, in call order
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    /// Temperatures received so far, in call order
    pub fn temperatures(&self) -> Vec<f32> {
        self.temperatures.lock().unwrap().clone()
    }

    /// Reset the call history
    pub fn reset_call_count(&self) {
        self.prompts.lock().unwrap().clear();
        self.temperatures.lock().unwrap().clear();
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

impl CompletionProvider for MockProvider {
    type Error = LlmError;

    fn complete(&self, prompt: &str, temperature: f32) -> Result<String, Self::Error> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.temperatures.lock().unwrap().push(temperature);

        let scripted = self.script.lock().unwrap().pop_front();
        let reply = match scripted {
            Some(reply) => reply,
            None => self
                .responses
                .lock()
                .unwrap()
                .get(prompt)
                .cloned()
                .unwrap_or_else(|| MockReply::Text(self.default_response.clone())),
        };

        match reply {
            MockReply::Text(text) => Ok(text),
            MockReply::Error => Err(LlmError::Other("Mock error".to_string())),
        }
    }

    fn model_name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_provider_default() {
        let provider = MockProvider::new("Test response");
        let result = provider.complete("any prompt", 0.2);
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), "Test response");
    }

    #[test]
    fn test_mock_provider_specific_responses() {
        let provider = MockProvider::default();
        provider.add_response("hello", "world");
        provider.add_response("foo", "bar");

        assert_eq!(provider.complete("hello", 0.2).unwrap(), "world");
        assert_eq!(provider.complete("foo", 0.2).unwrap(), "bar");
        assert_eq!(provider.complete("unknown", 0.2).unwrap(), "Default mock response");
    }

    #[test]
    fn test_mock_provider_call_count() {
        let provider = MockProvider::new("test");

        assert_eq!(provider.call_count(), 0);

        provider.complete("prompt1", 0.2).unwrap();
        assert_eq!(provider.call_count(), 1);

        provider.complete("prompt2", 0.2).unwrap();
        assert_eq!(provider.call_count(), 2);
        assert_eq!(provider.prompts(), vec!["prompt1", "prompt2"]);

        provider.reset_call_count();
        assert_eq!(provider.call_count(), 0);
    }

    #[test]
    fn test_mock_provider_error() {
        let provider = MockProvider::default();
        provider.add_error("bad prompt");

        let result = provider.complete("bad prompt", 0.2);
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), LlmError::Other(_)));
    }

    #[test]
    fn test_mock_provider_script_takes_precedence() {
        let provider = MockProvider::with_script("fallback", ["first", "second"]);
        provider.add_response("p", "mapped");

        assert_eq!(provider.complete("p", 0.2).unwrap(), "first");
        assert_eq!(provider.complete("p", 0.2).unwrap(), "second");
        assert_eq!(provider.complete("p", 0.2).unwrap(), "mapped");
        assert_eq!(provider.complete("other", 0.2).unwrap(), "fallback");
    }

    #[test]
    fn test_mock_provider_clones_share_responses() {
        let provider = MockProvider::default();
        let handle = provider.clone();
        handle.add_response("hello", "world");
        handle.add_error("bad prompt");

        assert_eq!(provider.complete("hello", 0.2).unwrap(), "world");
        assert!(provider.complete("bad prompt", 0.2).is_err());
        assert_eq!(handle.call_count(), 2);
    }

    #[test]
    fn test_mock_provider_scripted_error() {
        let provider = MockProvider::new("ok");
        provider.push_error();
        assert!(provider.complete("p", 0.2).is_err());
        assert_eq!(provider.complete("p", 0.2).unwrap(), "ok");
    }

    #[test]
    fn test_mock_provider_records_temperature() {
        let provider = MockProvider::new("ok");
        provider.complete("p", 0.2).unwrap();
        assert_eq!(provider.temperatures(), vec![0.2]);
    }

    #[test]
    fn test_mock_provider_clone() {
        let provider1 = MockProvider::new("test");
        let provider2 = provider1.clone();

        provider1.complete("test", 0.2).unwrap();

        // Both share the same history due to Arc
        assert_eq!(provider1.call_count(), 1);
        assert_eq!(provider2.call_count(), 1);
    }
}
