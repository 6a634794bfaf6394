//! Sentence segmentation for resume text.

/// Bullet glyphs that open a new clause.
const BULLET_CHARS: &[char] = &['•', '▪', '●', '◦'];

/// Whitespace for normalization: Unicode whitespace plus the ASCII information
/// separators U+001C–U+001F.
pub fn is_text_whitespace(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Fragments at or below this many characters are dropped.
pub const MIN_SENTENCE_CHARS: usize = 25;

/// Splits resume text into trimmed sentences/clauses longer than `MIN_SENTENCE_CHARS`.
///
/// Bullets become `". "` so each bullet starts a clause, whitespace runs collapse to a
/// single space, and the text is cut at the space following `.`, `!` or `?`.
pub fn segment(text: &str) -> Vec<String> {
    let normalized = normalize(text);

    split_after_terminators(&normalized)
        .into_iter()
        .map(|part| part.trim_matches(is_text_whitespace))
        .filter(|part| part.chars().count() > MIN_SENTENCE_CHARS)
        .map(String::from)
        .collect()
}

fn normalize(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len());
    let mut in_whitespace = false;

    for c in text.chars() {
        if BULLET_CHARS.contains(&c) {
            normalized.push('.');
            in_whitespace = false;
        }
        if is_text_whitespace(c) || BULLET_CHARS.contains(&c) {
            if !in_whitespace {
                normalized.push(' ');
            }
            in_whitespace = true;
        } else {
            normalized.push(c);
            in_whitespace = false;
        }
    }
    normalized
}

/// Cuts at every space preceded by a terminator. The space is consumed, the
/// terminator stays on the left fragment.
fn split_after_terminators(normalized: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut prev: Option<char> = None;

    for (idx, c) in normalized.char_indices() {
        if c == ' ' && matches!(prev, Some('.' | '!' | '?')) {
            parts.push(&normalized[start..idx]);
            start = idx + c.len_utf8();
        }
        prev = Some(c);
    }
    parts.push(&normalized[start..]);
    parts
}
