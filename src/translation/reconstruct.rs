/*!
 * Reassembly of translated prose and preserved markup.
 *
 * Both input streams carry their original byte offsets, so reconstruction is
 * a single merge in ascending offset order. This stays correct when the
 * message begins with a protected segment, where a fixed chunk/segment
 * alternation would pair segments with the wrong chunks.
 */

use crate::markup::{Span, TranslatableChunk};

/// Interleave translated chunks and preserved segments by original offset.
///
/// `translated` pairs with `chunks` by index. A chunk without a translated
/// counterpart (the response carried fewer parts than submitted) is skipped
/// rather than erroring; surplus translated parts are ignored. Preserved
/// segments are emitted verbatim from their `source_text`.
pub fn reconstruct_message(
    chunks: &[TranslatableChunk],
    translated: &[String],
    segments: &[Span],
) -> String {
    let mut result = String::new();
    let mut chunk_index = 0;
    let mut segment_index = 0;

    while chunk_index < chunks.len() || segment_index < segments.len() {
        let chunk_offset = chunks.get(chunk_index).map(|c| c.original_offset);
        let segment_offset = segments.get(segment_index).map(|s| s.start_index);

        let take_chunk = match (chunk_offset, segment_offset) {
            (Some(chunk), Some(segment)) => chunk < segment,
            (Some(_), None) => true,
            (None, _) => false,
        };

        if take_chunk {
            if let Some(part) = translated.get(chunk_index) {
                result.push_str(part);
            }
            chunk_index += 1;
        } else {
            result.push_str(&segments[segment_index].source_text);
            segment_index += 1;
        }
    }

    result
}
