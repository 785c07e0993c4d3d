/*!
 * Core translation pipeline.
 *
 * This module contains the main TranslationService struct and its
 * implementation, which runs the full detect -> merge -> split -> translate
 * -> reconstruct sequence for one chat message. The segmentation steps are
 * pure functions of the input text; the only blocking operation is the
 * provider call, and every failure comes back as a `TranslateError` value
 * rather than a panic or a propagated exception.
 */

use std::sync::Arc;

use log::debug;

use crate::app_config::Config;
use crate::errors::TranslateError;
use crate::language_utils;
use crate::markup::{find_protected_spans, merge_spans, split_translatable};
use crate::providers::TranslationProvider;
use crate::providers::google::GoogleWebTranslate;
use crate::translation::reconstruct::reconstruct_message;

/// A successfully translated message
///
/// `showing_original` belongs to the host: it starts out true and is flipped
/// through the message store when the user toggles between views. The
/// pipeline itself never reads it back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatedMessage {
    /// Detected source language code, or the hint when no call was made
    pub source_language: String,

    /// Target language code
    pub target_language: String,

    /// The full original message text
    pub source_text: String,

    /// The reassembled translation
    pub translated_text: String,

    /// Whether the host currently renders the original instead of the translation
    pub showing_original: bool,
}

/// Translation service running the markup-preserving pipeline
pub struct TranslationService {
    /// Remote translation provider
    provider: Arc<dyn TranslationProvider>,

    /// Target language used when the caller gives none
    default_target: String,
}

impl TranslationService {
    /// Create a service over the given provider
    pub fn new(provider: Arc<dyn TranslationProvider>, default_target: impl Into<String>) -> Self {
        Self {
            provider,
            default_target: default_target.into(),
        }
    }

    /// Create a service from the application configuration
    pub fn from_config(config: &Config) -> Self {
        let provider = GoogleWebTranslate::new(
            config.translation.endpoint.clone(),
            config.translation.timeout_secs,
        );
        Self::new(Arc::new(provider), config.target_language.clone())
    }

    /// Test the connection to the underlying provider
    pub async fn test_connection(&self) -> Result<(), TranslateError> {
        self.provider
            .test_connection()
            .await
            .map_err(TranslateError::from)
    }

    /// Translate one chat message, preserving protected markup.
    ///
    /// `from` defaults to automatic detection, `to` to the configured target
    /// language. A message consisting solely of protected markup (or nothing
    /// at all) is echoed back without a remote call. Failures carry the
    /// provider's numeric code and message; nothing is retried here.
    pub async fn translate_message(
        &self,
        text: &str,
        from: Option<&str>,
        to: Option<&str>,
    ) -> Result<TranslatedMessage, TranslateError> {
        let source = from.unwrap_or(language_utils::AUTO_LANGUAGE);
        let target = to.unwrap_or(&self.default_target);

        let spans = find_protected_spans(text);
        let segments = merge_spans(spans);
        let chunks = split_translatable(text, &segments);

        debug!(
            "Message split into {} translatable chunk(s) and {} protected segment(s)",
            chunks.len(),
            segments.len()
        );

        // Nothing but protected markup, or nothing at all: echo the input
        // without a remote call.
        if chunks.is_empty() {
            return Ok(TranslatedMessage {
                source_language: source.to_string(),
                target_language: target.to_string(),
                source_text: text.to_string(),
                translated_text: text.to_string(),
                showing_original: true,
            });
        }

        let parts: Vec<String> = chunks.iter().map(|chunk| chunk.text.clone()).collect();
        let batch = self
            .provider
            .translate_batch(&parts, source, target)
            .await
            .map_err(TranslateError::from)?;

        let translated_text = reconstruct_message(&chunks, &batch.parts, &segments);

        Ok(TranslatedMessage {
            source_language: batch.detected_source,
            target_language: target.to_string(),
            source_text: text.to_string(),
            translated_text,
            showing_original: true,
        })
    }
}
