/*!
 * Single-chunk translation against a model provider.
 *
 * `ChunkTranslator` renders the prompt for one chunk, issues exactly one
 * request to the provider, and cleans up the response text. Retries and
 * scheduling are the caller's concern.
 */

use log::debug;

use crate::app_config::Config;
use crate::errors::{ProviderError, TranslationError};
use crate::providers::Provider;
use crate::providers::ollama::{GenerationRequest, GenerationResponse, Ollama};
use crate::translation::prompts::PromptTemplate;

/// Translates one chunk at a time through a completion provider.
#[derive(Debug)]
pub struct ChunkTranslator<P = Ollama>
where
    P: Provider<Request = GenerationRequest, Response = GenerationResponse>,
{
    /// Settings for this run
    config: Config,
    /// Completion backend
    provider: P,
    /// Prompt template rendered per chunk
    template: PromptTemplate,
}

impl ChunkTranslator<Ollama> {
    /// Create a translator backed by the configured Ollama endpoint.
    pub fn new(config: Config) -> Self {
        let provider = Ollama::from_url(&config.endpoint);
        Self::with_provider(config, provider)
    }
}

impl<P> ChunkTranslator<P>
where
    P: Provider<Request = GenerationRequest, Response = GenerationResponse>,
{
    /// Create a translator over an explicit provider instance.
    pub fn with_provider(config: Config, provider: P) -> Self {
        Self {
            config,
            provider,
            template: PromptTemplate::document_translator(),
        }
    }

    /// The settings this translator runs with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Translate a single chunk, returning the cleaned response text.
    ///
    /// Connectivity failures surface as the distinguished
    /// `TranslationError::ServiceUnavailable` carrying the configured
    /// endpoint; every other failure propagates unchanged.
    pub async fn translate_chunk(&self, chunk: &str) -> Result<String, TranslationError> {
        let prompt = self.template.render(&self.config, chunk);
        debug!(
            "Sending chunk of {} chars to model {}",
            chunk.chars().count(),
            self.config.model
        );

        let request = GenerationRequest::new(self.config.model.as_str(), prompt).no_stream();
        let response = match self.provider.complete(request).await {
            Ok(response) => response,
            Err(ProviderError::ConnectionError(_)) => {
                return Err(TranslationError::ServiceUnavailable {
                    endpoint: self.config.endpoint.clone(),
                });
            }
            Err(other) => return Err(other.into()),
        };

        Ok(P::extract_text(&response).trim().to_string())
    }
}
