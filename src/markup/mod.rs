/*!
 * Protected chat markup handling.
 *
 * This module turns a raw chat message into the pieces the translation
 * pipeline works with. It is split into several submodules:
 *
 * - `span`: the span model and interval merging
 * - `detectors`: per-category pattern matchers for protected markup
 * - `splitter`: extraction of translatable prose between protected spans
 */

// Re-export main types for easier usage
pub use self::detectors::find_protected_spans;
pub use self::span::{Span, merge_spans};
pub use self::splitter::{TranslatableChunk, split_translatable};

// Submodules
pub mod detectors;
pub mod span;
pub mod splitter;
