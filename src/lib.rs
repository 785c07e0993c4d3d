/*!
 * # yacmt - Yet Another Chat Message Translator
 *
 * A Rust library for translating chat messages while leaving protected
 * markup byte-for-byte intact.
 *
 * ## Features
 *
 * - Detection of protected markup spans:
 *   - Custom emoji tags (`<:name:id>`, `<a:name:id>`)
 *   - User, role and channel mentions
 *   - Block formatting (code fences, inline code, spoilers, quote lines)
 *   - Inline formatting (bold, italic, underline, strikethrough)
 * - Interval merging of overlapping spans into a disjoint ordered cover
 * - Batching of all prose fragments into a single remote call
 * - Offset-ordered reassembly of translated prose and preserved markup
 * - Host-side message store with an original/translation visibility toggle
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `markup`: Protected-span detection, merging and splitting
 * - `translation`: The translation pipeline and the message store:
 *   - `translation::core`: Core pipeline and service definition
 *   - `translation::reconstruct`: Offset-ordered output reassembly
 *   - `translation::store`: Host-side keyed store with visibility toggle
 * - `providers`: Client implementations for translation services:
 *   - `providers::google`: Google web endpoint client
 *   - `providers::mock`: Scripted behaviors for tests
 * - `app_controller`: Main application controller
 * - `language_utils`: ISO language code utilities
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod language_utils;
pub mod markup;
pub mod providers;
pub mod translation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use errors::{AppError, ProviderError, TranslateError};
pub use markup::{Span, TranslatableChunk, find_protected_spans, merge_spans, split_translatable};
pub use translation::{MessageStore, TranslatedMessage, TranslationService};
