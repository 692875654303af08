/*!
 * Provider implementation for the translation service.
 *
 * The `Provider` trait is the seam between the translation pipeline and a
 * concrete LLM backend. `providers::ollama` is the shipped implementation;
 * tests substitute mock providers through the same trait.
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;

/// Common trait for LLM completion backends
///
/// This trait defines the interface a provider implementation must follow,
/// allowing backends to be used interchangeably in the translation pipeline.
#[async_trait]
pub trait Provider: Send + Sync + Debug {
    /// The request type for this provider
    type Request: Send + Sync;

    /// The response type for this provider
    type Response: Send + Sync;

    /// Complete a request using this provider
    ///
    /// One best-effort attempt; retry policy belongs to the caller.
    async fn complete(&self, request: Self::Request) -> Result<Self::Response, ProviderError>;

    /// Test the connection to the provider
    async fn test_connection(&self) -> Result<(), ProviderError>;

    /// Extract text from the provider response
    fn extract_text(response: &Self::Response) -> String;
}

pub mod ollama;
