use anyhow::{Result, anyhow};
use isolang::Language;

/// Language utilities for ISO language code handling
///
/// The translation endpoint speaks ISO 639-1 (2-letter) codes plus the
/// special `auto` sentinel requesting source-language detection.
/// Sentinel accepted as a source language to request detection
pub const AUTO_LANGUAGE: &str = "auto";

/// Validate a language code for use as a translation source
///
/// Accepts any valid target code plus the `auto` sentinel.
pub fn validate_source_language(code: &str) -> Result<()> {
    if code.trim().eq_ignore_ascii_case(AUTO_LANGUAGE) {
        return Ok(());
    }
    validate_language_code(code)
}

/// Validate that a code is a known ISO 639-1 language code
pub fn validate_language_code(code: &str) -> Result<()> {
    let normalized_code = code.trim().to_lowercase();

    if normalized_code.len() == 2 && Language::from_639_1(&normalized_code).is_some() {
        return Ok(());
    }

    Err(anyhow!("Invalid language code: {}", code))
}

/// English name for a language code, falling back to the code itself.
///
/// Detection results such as `unknown` or the `auto` sentinel pass through
/// unchanged, which is what the rendered suffix wants anyway.
pub fn get_language_name(code: &str) -> String {
    let normalized_code = code.trim().to_lowercase();

    Language::from_639_1(&normalized_code)
        .map(|lang| lang.to_name().to_string())
        .unwrap_or_else(|| code.to_string())
}
