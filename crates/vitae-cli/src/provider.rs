//! Completion provider selection.

use crate::config::{ProviderKind, ProviderSettings, DEFAULT_OLLAMA_MODEL};
use crate::error::{CliError, Result};
use vitae_domain::traits::CompletionProvider;
use vitae_llm::{CohereProvider, LlmError, OllamaProvider};

/// Environment variable holding the Cohere API key
pub const COHERE_API_KEY_VAR: &str = "COHERE_API_KEY";

/// The provider chosen by configuration.
pub enum SelectedProvider {
    /// Hosted Cohere model
    Cohere(CohereProvider),
    /// Local Ollama model
    Ollama(OllamaProvider),
}

impl SelectedProvider {
    /// Build the configured provider.
    ///
    /// Cohere needs `api_key`; a missing or blank key is a configuration
    /// error, so a batch never starts without credentials.
    ///
    /// The HTTP clients are blocking and must not be built on a runtime
    /// worker, so construction runs on the blocking pool.
    pub async fn from_settings(settings: &ProviderSettings, api_key: Option<String>) -> Result<Self> {
        let api_key = match settings.kind {
            ProviderKind::Cohere => Some(
                api_key
                    .filter(|k| !k.trim().is_empty())
                    .ok_or_else(missing_key)?,
            ),
            ProviderKind::Ollama => None,
        };

        let settings = settings.clone();
        tokio::task::spawn_blocking(move || Self::build(&settings, api_key))
            .await
            .map_err(|e| CliError::Config(format!("Provider setup failed: {}", e)))?
    }

    fn build(settings: &ProviderSettings, api_key: Option<String>) -> Result<Self> {
        match (settings.kind, api_key) {
            (ProviderKind::Cohere, Some(api_key)) => {
                let mut provider = CohereProvider::new(api_key)?;
                if let Some(model) = &settings.model {
                    provider = provider.with_model(model);
                }
                if let Some(endpoint) = &settings.endpoint {
                    provider = provider.with_endpoint(endpoint);
                }
                Ok(SelectedProvider::Cohere(provider))
            }
            (ProviderKind::Cohere, None) => Err(missing_key()),
            (ProviderKind::Ollama, _) => {
                let model = settings.model.as_deref().unwrap_or(DEFAULT_OLLAMA_MODEL);
                let provider = match &settings.endpoint {
                    Some(endpoint) => OllamaProvider::new(endpoint, model)?,
                    None => OllamaProvider::default_endpoint(model)?,
                };
                Ok(SelectedProvider::Ollama(provider))
            }
        }
    }
}

fn missing_key() -> CliError {
    CliError::Config(format!(
        "{} not set in environment variables or .env file",
        COHERE_API_KEY_VAR
    ))
}

impl CompletionProvider for SelectedProvider {
    type Error = LlmError;

    fn complete(&self, prompt: &str, temperature: f32) -> std::result::Result<String, Self::Error> {
        match self {
            SelectedProvider::Cohere(p) => p.complete(prompt, temperature),
            SelectedProvider::Ollama(p) => p.complete(prompt, temperature),
        }
    }

    fn model_name(&self) -> &str {
        match self {
            SelectedProvider::Cohere(p) => p.model_name(),
            SelectedProvider::Ollama(p) => p.model_name(),
        }
    }
}
