/*!
 * Mock provider implementations for testing.
 *
 * This module provides mock providers that simulate different behaviors:
 * - `MockProvider::working()` - echoes every part with a translation marker
 * - `MockProvider::rate_limited()` - always answers as HTTP 429 would
 * - `MockProvider::failing(status)` - always fails with the given status
 * - `MockProvider::malformed()` - fails like an unparseable response body
 * - `MockProvider::short_response()` - drops the last part of every batch
 */

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::errors::ProviderError;
use crate::providers::{BatchTranslation, TranslationProvider};

/// Behavior mode for the mock provider
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Echo each part bracketed with a translation marker
    Working,
    /// Always fail as a rate-limited request
    RateLimited,
    /// Always fail with the given HTTP status
    Failing { status: u16 },
    /// Always fail like an unparseable response body
    Malformed,
    /// Return one part fewer than submitted
    ShortResponse,
}

/// Mock provider for testing pipeline behavior without network access
#[derive(Debug)]
pub struct MockProvider {
    /// Behavior mode
    behavior: MockBehavior,

    /// Detected source language reported on success
    detected_source: String,

    /// Number of batches submitted so far
    request_count: Arc<AtomicUsize>,
}

impl MockProvider {
    /// Create a new mock provider with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            detected_source: "en".to_string(),
            request_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a working mock provider that always succeeds
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// Create a mock that always answers as HTTP 429 would
    pub fn rate_limited() -> Self {
        Self::new(MockBehavior::RateLimited)
    }

    /// Create a failing mock provider with the given HTTP status
    pub fn failing(status: u16) -> Self {
        Self::new(MockBehavior::Failing { status })
    }

    /// Create a mock that fails like an unparseable response body
    pub fn malformed() -> Self {
        Self::new(MockBehavior::Malformed)
    }

    /// Create a mock that returns one part fewer than submitted
    pub fn short_response() -> Self {
        Self::new(MockBehavior::ShortResponse)
    }

    /// Override the detected source language reported on success
    pub fn with_detected_source(mut self, code: impl Into<String>) -> Self {
        self.detected_source = code.into();
        self
    }

    /// Number of batches submitted to this mock so far
    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }

    /// Marker translation applied to one part
    pub fn translate_part(part: &str, target_language: &str) -> String {
        format!("[{}]{}", target_language, part)
    }
}

impl Clone for MockProvider {
    fn clone(&self) -> Self {
        Self {
            behavior: self.behavior,
            detected_source: self.detected_source.clone(),
            request_count: Arc::clone(&self.request_count),
        }
    }
}

#[async_trait]
impl TranslationProvider for MockProvider {
    async fn translate_batch(
        &self,
        parts: &[String],
        _source_language: &str,
        target_language: &str,
    ) -> Result<BatchTranslation, ProviderError> {
        self.request_count.fetch_add(1, Ordering::SeqCst);

        match self.behavior {
            MockBehavior::Working => Ok(BatchTranslation {
                parts: parts
                    .iter()
                    .map(|part| Self::translate_part(part, target_language))
                    .collect(),
                detected_source: self.detected_source.clone(),
            }),

            MockBehavior::RateLimited => Err(ProviderError::RateLimited),

            MockBehavior::Failing { status } => Err(ProviderError::RequestFailed(status)),

            MockBehavior::Malformed => Err(ProviderError::ParseError(
                "missing translation section array".to_string(),
            )),

            MockBehavior::ShortResponse => {
                let mut translated: Vec<String> = parts
                    .iter()
                    .map(|part| Self::translate_part(part, target_language))
                    .collect();
                translated.pop();

                Ok(BatchTranslation {
                    parts: translated,
                    detected_source: self.detected_source.clone(),
                })
            }
        }
    }

    async fn test_connection(&self) -> Result<(), ProviderError> {
        match self.behavior {
            MockBehavior::Working | MockBehavior::ShortResponse => Ok(()),
            MockBehavior::RateLimited => Err(ProviderError::RateLimited),
            MockBehavior::Failing { status } => Err(ProviderError::RequestFailed(status)),
            MockBehavior::Malformed => Err(ProviderError::ParseError(
                "missing translation section array".to_string(),
            )),
        }
    }
}
