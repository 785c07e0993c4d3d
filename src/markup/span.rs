/*!
 * Protected-span model and interval merging.
 *
 * A span is a half-open byte range over the original message text together
 * with the exact substring it covers. Detectors produce raw spans
 * independently and may overlap each other; `merge_spans` collapses them into
 * the minimal disjoint ordered cover consumed by the splitter and the
 * reconstruction step.
 */

/// A protected region of the original message text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// Start byte offset in the original text (inclusive)
    pub start_index: usize,

    /// End byte offset in the original text (exclusive)
    pub end_index: usize,

    /// Exact substring covered by the span, delimiters included
    pub source_text: String,
}

impl Span {
    /// Create a new span over `[start_index, end_index)`
    pub fn new(start_index: usize, end_index: usize, source_text: impl Into<String>) -> Self {
        Self {
            start_index,
            end_index,
            source_text: source_text.into(),
        }
    }

    /// Length of the covered range in bytes
    pub fn len(&self) -> usize {
        self.end_index - self.start_index
    }

    /// Whether the span covers nothing
    pub fn is_empty(&self) -> bool {
        self.end_index <= self.start_index
    }
}

/// Merge raw spans into a sorted, pairwise-disjoint minimal cover.
///
/// Touching spans (`current.end_index == next.start_index`) are merged as
/// well, so the output is exactly the interval union of the inputs. Input
/// order does not matter; the `source_text` of a merged span is rebuilt by
/// appending the non-overlapping suffix of each absorbed span.
pub fn merge_spans(mut spans: Vec<Span>) -> Vec<Span> {
    spans.sort_by_key(|span| span.start_index);

    let mut iter = spans.into_iter();
    let Some(mut current) = iter.next() else {
        return Vec::new();
    };

    let mut merged = Vec::new();
    for next in iter {
        if current.end_index >= next.start_index {
            // Overlapping or touching: absorb `next` into `current`.
            if next.end_index > current.end_index {
                let overlap = current.end_index - next.start_index;
                current.source_text.push_str(&next.source_text[overlap..]);
                current.end_index = next.end_index;
            }
        } else {
            merged.push(current);
            current = next;
        }
    }
    merged.push(current);

    merged
}
