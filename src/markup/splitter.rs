/*!
 * Extraction of translatable prose between protected segments.
 */

use super::span::Span;

/// A prose fragment eligible for remote translation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatableChunk {
    /// The fragment text
    pub text: String,

    /// Byte offset of the fragment in the original message
    pub original_offset: usize,
}

/// Split the original text into translatable chunks around a merged cover.
///
/// `segments` must be sorted and pairwise disjoint (the output of
/// `merge_spans`). Zero-length chunks are never emitted: adjacent segments
/// with no gap between them, or a segment starting at offset 0, contribute
/// no chunk.
pub fn split_translatable(text: &str, segments: &[Span]) -> Vec<TranslatableChunk> {
    let mut chunks = Vec::new();
    let mut last_index = 0;

    for segment in segments {
        if last_index < segment.start_index {
            chunks.push(TranslatableChunk {
                text: text[last_index..segment.start_index].to_string(),
                original_offset: last_index,
            });
        }
        last_index = segment.end_index;
    }

    if last_index < text.len() {
        chunks.push(TranslatableChunk {
            text: text[last_index..].to_string(),
            original_offset: last_index,
        });
    }

    chunks
}
