/*!
 * Tests for protected-markup detection, merging and splitting
 */

use yacmt::markup::{
    Span, detectors, find_protected_spans, merge_spans, split_translatable,
};
use yacmt::translation::reconstruct_message;

/// Shorthand span constructor
fn span(start: usize, end: usize, text: &str) -> Span {
    Span::new(start, end, text)
}

/// Collect the set of covered indices of a span list
fn covered_indices(spans: &[Span]) -> Vec<usize> {
    let mut indices: Vec<usize> = spans
        .iter()
        .flat_map(|s| s.start_index..s.end_index)
        .collect();
    indices.sort_unstable();
    indices.dedup();
    indices
}

/// Run the full segmentation front end on a message
fn segment(text: &str) -> Vec<Span> {
    merge_spans(find_protected_spans(text))
}

// ========== Merge correctness ==========

#[test]
fn test_merge_spans_withOverlappingUnsortedInput_shouldCoverSameIndices() {
    let input = vec![
        span(10, 14, "jklm"),
        span(0, 4, "abcd"),
        span(2, 6, "cdef"),
        span(13, 15, "mn"),
        span(4, 5, "e"),
    ];
    let expected_cover = covered_indices(&input);

    let merged = merge_spans(input);

    // Sorted by start index
    let starts: Vec<usize> = merged.iter().map(|s| s.start_index).collect();
    let mut sorted_starts = starts.clone();
    sorted_starts.sort_unstable();
    assert_eq!(starts, sorted_starts);

    // Pairwise disjoint
    for pair in merged.windows(2) {
        assert!(pair[0].end_index < pair[1].start_index);
    }

    // Same covered indices as the input union
    assert_eq!(covered_indices(&merged), expected_cover);
}

#[test]
fn test_merge_spans_withRealOverlap_shouldRebuildSourceTextFromSlices() {
    let text = "**bold `code`**";
    let merged = segment(text);

    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].source_text, text);
    assert_eq!(merged[0].start_index, 0);
    assert_eq!(merged[0].end_index, text.len());
}

// ========== Detector categories ==========

#[test]
fn test_find_emoji_spans_shouldMatchStaticAndAnimatedTags() {
    let spans = detectors::find_emoji_spans("hi <:smile:123> and <a:wave:456>");
    let texts: Vec<&str> = spans.iter().map(|s| s.source_text.as_str()).collect();
    assert_eq!(texts, vec!["<:smile:123>", "<a:wave:456>"]);
}

#[test]
fn test_find_mention_spans_shouldMatchAllMentionKinds() {
    let spans =
        detectors::find_mention_spans("<@123> <@!456> <@&789> <#101112> not <@a>");
    let texts: Vec<&str> = spans.iter().map(|s| s.source_text.as_str()).collect();
    assert_eq!(texts, vec!["<@123>", "<@!456>", "<@&789>", "<#101112>"]);
}

#[test]
fn test_find_block_spans_shouldMatchCodeFenceAcrossLines() {
    let text = "before ```let x = 1;\nlet y = 2;``` after";
    let spans = detectors::find_block_spans(text);
    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].source_text, "```let x = 1;\nlet y = 2;```");
}

#[test]
fn test_find_block_spans_shouldMatchInlineCodeAndSpoiler() {
    let spans = detectors::find_block_spans("a `code` and ||secret|| here");
    let texts: Vec<&str> = spans.iter().map(|s| s.source_text.as_str()).collect();
    assert!(texts.contains(&"`code`"));
    assert!(texts.contains(&"||secret||"));
}

#[test]
fn test_find_block_spans_withMultilineQuote_shouldEmitOneSpanPerLine() {
    let text = "> first line\n> second line\nprose";
    let spans = detectors::find_block_spans(text);
    let texts: Vec<&str> = spans.iter().map(|s| s.source_text.as_str()).collect();
    assert_eq!(texts, vec!["> first line", "> second line"]);
}

#[test]
fn test_find_inline_spans_shouldMatchEveryInlineCategory() {
    // Single-delimiter categories come first: a preceding ** or __ leaves a
    // dangling delimiter that would pair with the next opener otherwise.
    let text = "*it* _also_ ~~gone~~ __under__ **bold**";
    let spans = detectors::find_inline_spans(text);
    let texts: Vec<&str> = spans.iter().map(|s| s.source_text.as_str()).collect();
    assert!(texts.contains(&"**bold**"));
    assert!(texts.contains(&"__under__"));
    assert!(texts.contains(&"~~gone~~"));
    assert!(texts.contains(&"*it*"));
    assert!(texts.contains(&"_also_"));
}

#[test]
fn test_find_protected_spans_withOverlappingCategories_shouldDeferToMerger() {
    // Inline code inside a quote line: both detectors claim the range,
    // the merged cover collapses it to the whole line.
    let text = "> see `this`";
    let merged = segment(text);
    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].source_text, "> see `this`");
}

#[test]
fn test_find_protected_spans_withPlainProse_shouldFindNothing() {
    assert!(find_protected_spans("just some ordinary words").is_empty());
}

// ========== Splitter ==========

#[test]
fn test_split_translatable_withSegmentAtStart_shouldNotEmitEmptyChunk() {
    let text = "<@1> hello";
    let segments = segment(text);
    let chunks = split_translatable(text, &segments);

    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].text, " hello");
    assert_eq!(chunks[0].original_offset, 4);
}

#[test]
fn test_split_translatable_withAdjacentSegments_shouldSkipZeroLengthGap() {
    let text = "<@1><@2> tail";
    let segments = segment(text);
    let chunks = split_translatable(text, &segments);

    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].text, " tail");
}

#[test]
fn test_split_translatable_withGapsAroundSegment_shouldRecordOffsets() {
    let text = "Hello **world** !";
    let segments = segment(text);
    let chunks = split_translatable(text, &segments);

    assert_eq!(chunks.len(), 2);
    assert_eq!(chunks[0].text, "Hello ");
    assert_eq!(chunks[0].original_offset, 0);
    assert_eq!(chunks[1].text, " !");
    assert_eq!(chunks[1].original_offset, 15);
}

#[test]
fn test_split_translatable_withEmptyText_shouldEmitNothing() {
    assert!(split_translatable("", &[]).is_empty());
}

// ========== Split/reconstruct identity ==========

#[test]
fn test_splitAndReconstruct_withIdentityParts_shouldReproduceOriginal() {
    let samples = [
        "plain prose with no markup at all",
        "Hello **world** <@1>!",
        "<@1> leading mention",
        "trailing mention <@1>",
        "<:smile:1> `code` ||spoiler|| ~~done~~",
        "> quoted\nplain\n> quoted again",
        "``fence``` odd backticks `x`",
    ];

    for text in samples {
        let segments = segment(text);
        let chunks = split_translatable(text, &segments);
        let identity: Vec<String> = chunks.iter().map(|c| c.text.clone()).collect();

        let rebuilt = reconstruct_message(&chunks, &identity, &segments);
        assert_eq!(rebuilt, *text, "identity reconstruction failed for {:?}", text);
    }
}
