/*!
 * Client for the Google web translation endpoint.
 *
 * Speaks the unauthenticated interface the translate web widget uses: one
 * GET per batch with `client=gtx`, the joined parts in `q` and `dt=t` to
 * request translated-text segments. The response is a positional JSON array
 * rather than an object, so parsing goes through `serde_json::Value`.
 */

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, error};
use reqwest::Client;
use serde_json::Value;
use url::Url;

use crate::errors::ProviderError;
use crate::providers::{BatchTranslation, TranslationProvider};

/// Delimiter used to batch several prose parts into one `q` parameter.
///
/// The embedded control character never occurs in chat prose and passes
/// through translation unchanged, so response segments line up with the
/// submitted parts.
pub const PART_DELIMITER: &str = "\n\u{0002}\n";

/// Reported when the response carries no detection result
const UNKNOWN_LANGUAGE: &str = "unknown";

/// Browser-like user agent; the endpoint rejects obviously non-browser clients
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; WOW64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/94.0.4592.0 Safari/537.36";

/// Client for the Google web translation endpoint
#[derive(Debug, Clone)]
pub struct GoogleWebTranslate {
    /// HTTP client for API requests
    client: Client,

    /// Endpoint URL
    endpoint: String,
}

impl GoogleWebTranslate {
    /// Create a new client against the given endpoint
    pub fn new(endpoint: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
            endpoint: endpoint.into(),
        }
    }

    /// Build the request URL for one batch
    fn request_url(&self, query: &str, source: &str, target: &str) -> Result<Url, ProviderError> {
        Url::parse_with_params(
            &self.endpoint,
            &[
                ("client", "gtx"),
                ("sl", source),
                ("tl", target),
                ("dt", "t"),
                ("q", query),
            ],
        )
        .map_err(|e| ProviderError::ConnectionError(format!("Invalid endpoint URL: {}", e)))
    }

    /// Split the positional response array back into translated parts.
    ///
    /// Element 0 is an array of translation segments whose first element each
    /// is the translated text of one submitted part, in order. Element 2, if
    /// present and a string, is the detected source language.
    fn parse_response(body: &str) -> Result<BatchTranslation, ProviderError> {
        let parsed: Value =
            serde_json::from_str(body).map_err(|e| ProviderError::ParseError(e.to_string()))?;

        let sections = parsed.get(0).and_then(Value::as_array).ok_or_else(|| {
            ProviderError::ParseError("missing translation section array".to_string())
        })?;

        let mut parts = Vec::with_capacity(sections.len());
        for section in sections {
            if let Some(text) = section.get(0).and_then(Value::as_str) {
                parts.push(text.to_string());
            }
        }

        let detected_source = parsed
            .get(2)
            .and_then(Value::as_str)
            .unwrap_or(UNKNOWN_LANGUAGE)
            .to_string();

        Ok(BatchTranslation {
            parts,
            detected_source,
        })
    }
}

#[async_trait]
impl TranslationProvider for GoogleWebTranslate {
    async fn translate_batch(
        &self,
        parts: &[String],
        source_language: &str,
        target_language: &str,
    ) -> Result<BatchTranslation, ProviderError> {
        let query = parts.join(PART_DELIMITER);
        let url = self.request_url(&query, source_language, target_language)?;

        debug!(
            "Submitting {} part(s) for translation ({} -> {})",
            parts.len(),
            source_language,
            target_language
        );

        let response = self
            .client
            .get(url)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .send()
            .await
            .map_err(|e| ProviderError::ConnectionError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            error!("Translation request failed with status {}", status);
            return Err(match status.as_u16() {
                429 => ProviderError::RateLimited,
                code => ProviderError::RequestFailed(code),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::ConnectionError(e.to_string()))?;

        Self::parse_response(&body)
    }

    async fn test_connection(&self) -> Result<(), ProviderError> {
        let probe = vec!["hello".to_string()];
        self.translate_batch(&probe, "auto", "en").await?;
        Ok(())
    }
}
