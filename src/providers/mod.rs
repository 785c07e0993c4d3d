/*!
 * Provider implementations for translation services.
 *
 * This module contains client implementations for translation backends:
 * - Google: the unauthenticated Google web translation endpoint
 * - Mock: scripted behaviors for the test suite
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;

/// One translated batch as returned by a provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchTranslation {
    /// Translated texts, one per submitted part, in submission order
    pub parts: Vec<String>,

    /// Detected source language code, or "unknown" when the service
    /// reported none
    pub detected_source: String,
}

/// Common trait for translation providers
///
/// Implementations submit a list of prose fragments as a single request and
/// return the translated fragments in the same order. No retries happen at
/// this layer; rate-limit responses are surfaced to the caller to decide
/// whether and when to try again.
#[async_trait]
pub trait TranslationProvider: Send + Sync + Debug {
    /// Translate a batch of text parts in one remote call
    ///
    /// # Arguments
    /// * `parts` - The prose fragments to translate, in message order
    /// * `source_language` - ISO 639-1 code or "auto"
    /// * `target_language` - ISO 639-1 code
    ///
    /// # Returns
    /// * `Result<BatchTranslation, ProviderError>` - The translated parts or an error
    async fn translate_batch(
        &self,
        parts: &[String],
        source_language: &str,
        target_language: &str,
    ) -> Result<BatchTranslation, ProviderError>;

    /// Test the connection to the provider
    ///
    /// # Returns
    /// * `Result<(), ProviderError>` - Ok if the provider answers, or an error
    async fn test_connection(&self) -> Result<(), ProviderError>;
}

pub mod google;
pub mod mock;
