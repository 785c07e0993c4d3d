/*!
 * Error types for the yacmt application.
 *
 * This module contains custom error types for different parts of the
 * application, using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when talking to a translation provider
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// The service answered with HTTP 429
    #[error("Translate API ratelimit reached. Please try again later.")]
    RateLimited,

    /// The service answered with any other non-success status
    #[error("Translation request failed with status {0}")]
    RequestFailed(u16),

    /// The request could not be sent or the body could not be read
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The response body did not decode as expected
    #[error("Failed to parse translation response: {0}")]
    ParseError(String),
}

impl ProviderError {
    /// Numeric code surfaced to the caller alongside the message
    pub fn code(&self) -> i32 {
        match self {
            Self::RateLimited => 429,
            Self::RequestFailed(status) => i32::from(*status),
            Self::ConnectionError(_) => -1,
            Self::ParseError(_) => -2,
        }
    }
}

/// Failure result of the translation pipeline, returned as data.
///
/// Callers display the message together with the numeric code; the code is
/// the HTTP status for transport failures, -1 for connection failures and
/// -2 for parse failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message} ({code})")]
pub struct TranslateError {
    /// Numeric error code
    pub code: i32,

    /// Display message for the caller
    pub message: String,
}

impl From<ProviderError> for TranslateError {
    fn from(error: ProviderError) -> Self {
        Self {
            code: error.code(),
            message: error.to_string(),
        }
    }
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from a provider
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Error from the translation pipeline
    #[error("Translation error: {0}")]
    Translation(#[from] TranslateError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
