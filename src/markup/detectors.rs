/*!
 * Detection of protected chat markup.
 *
 * One independent matcher per markup category. Each returns every match of
 * its pattern as a raw `Span` whose `source_text` is the exact matched
 * substring, delimiters included. Overlap between categories (bold inside a
 * code fence, inline code inside a quote line) is resolved later by
 * `merge_spans`, never here.
 */

use once_cell::sync::Lazy;
use regex::Regex;

use super::span::Span;

/// Custom emoji tags: `<:name:id>` and animated `<a:name:id>`
static EMOJI_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<a?:[A-Za-z0-9_]+:\d+>").unwrap()
});

/// User `<@id>`, nickname `<@!id>`, role `<@&id>` and channel `<#id>` mentions
static MENTION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<@!?\d+>|<@&\d+>|<#\d+>").unwrap()
});

/// Block-level formatting patterns
static BLOCK_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        // Triple-backtick code fences, non-greedy across lines
        Regex::new(r"(?s)```.*?```").unwrap(),

        // Single-backtick inline code
        Regex::new(r"`[^`]+`").unwrap(),

        // Double-pipe spoilers, non-greedy across lines
        Regex::new(r"(?s)\|\|.*?\|\|").unwrap(),

        // Quote lines, one span per line
        Regex::new(r"(?m)^>.+$").unwrap(),
    ]
});

/// Inline formatting patterns
static INLINE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        // Bold with double asterisks
        Regex::new(r"\*\*[^*]+\*\*").unwrap(),

        // Italic with single asterisks
        Regex::new(r"\*[^*]+\*").unwrap(),

        // Underline with double underscores
        Regex::new(r"__[^_]+__").unwrap(),

        // Italic with single underscores
        Regex::new(r"_[^_]+_").unwrap(),

        // Strikethrough with double tildes
        Regex::new(r"~~[^~]+~~").unwrap(),
    ]
});

/// Collect every match of one pattern as a raw span
fn spans_for(pattern: &Regex, text: &str) -> Vec<Span> {
    pattern
        .find_iter(text)
        .map(|m| Span::new(m.start(), m.end(), m.as_str()))
        .collect()
}

/// Find custom emoji tags
pub fn find_emoji_spans(text: &str) -> Vec<Span> {
    spans_for(&EMOJI_REGEX, text)
}

/// Find mention tags
pub fn find_mention_spans(text: &str) -> Vec<Span> {
    spans_for(&MENTION_REGEX, text)
}

/// Find block formatting: code fences, inline code, spoilers and quote lines
pub fn find_block_spans(text: &str) -> Vec<Span> {
    BLOCK_PATTERNS
        .iter()
        .flat_map(|pattern| spans_for(pattern, text))
        .collect()
}

/// Find inline formatting: bold, italic, underline and strikethrough
pub fn find_inline_spans(text: &str) -> Vec<Span> {
    INLINE_PATTERNS
        .iter()
        .flat_map(|pattern| spans_for(pattern, text))
        .collect()
}

/// Run every detector over the text and concatenate the raw results.
///
/// The returned spans may overlap; callers are expected to pass them through
/// `merge_spans` before doing any index arithmetic on them.
pub fn find_protected_spans(text: &str) -> Vec<Span> {
    let mut spans = find_emoji_spans(text);
    spans.extend(find_mention_spans(text));
    spans.extend(find_block_spans(text));
    spans.extend(find_inline_spans(text));
    spans
}
