//! Title inference — short labels for projects and achievements.
//!
//! Each inference tries an ordered list of lead-in words and takes the title text
//! that follows the first (leftmost) match. Without a match, the opening clause of
//! the sentence is used instead. Matching is ASCII case-insensitive.

use crate::insights::segmenter::is_text_whitespace;

/// Used when nothing printable survives title cleaning.
pub const DEFAULT_TITLE: &str = "Highlighted Project";

/// Titles keep at most this many words.
pub const MAX_TITLE_WORDS: usize = 10;

const PROJECT_LEAD_INS: &[&str] = &["project", "application", "platform", "system"];
const ACHIEVEMENT_LEAD_INS: &[&str] = &["awarded", "won", "received", "recognized for"];

/// How the lead-in connects to the title text.
#[derive(Debug, Clone, Copy)]
enum Joiner {
    /// Optional whitespace, then `:` or `-`, then optional whitespace.
    Separator,
    /// At least one whitespace character.
    Whitespace,
}

/// Characters allowed in a title.
fn is_title_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, ' ' | ',' | '&' | '(' | ')' | '/' | '-')
}

/// Infers a project title, e.g. `"Built a platform: Campus Connect, a social app"`
/// → `"Campus Connect, a social app"`.
pub fn infer_project_title(sentence: &str) -> String {
    if let Some(candidate) = find_titled_lead_in(sentence, PROJECT_LEAD_INS, Joiner::Separator) {
        return trim_title(candidate.trim());
    }

    let clause = first_piece(sentence, ",");
    let clause = first_piece(clause, " - ");
    let clause = first_piece(clause, ". ");
    trim_title(clause)
}

/// Infers an achievement title, e.g. `"Won first place in ACM ICPC regionals"`
/// → `"first place in ACM ICPC regionals"`.
pub fn infer_achievement_title(sentence: &str) -> String {
    if let Some(candidate) =
        find_titled_lead_in(sentence, ACHIEVEMENT_LEAD_INS, Joiner::Whitespace)
    {
        return trim_title(candidate);
    }

    trim_title(first_piece(sentence, ". "))
}

/// Strips disallowed characters, falls back to `DEFAULT_TITLE` when nothing is left,
/// and keeps the first `MAX_TITLE_WORDS` words.
pub fn trim_title(text: &str) -> String {
    let cleaned: String = text.chars().filter(|c| is_title_char(*c)).collect();
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return DEFAULT_TITLE.to_string();
    }
    cleaned
        .split_whitespace()
        .take(MAX_TITLE_WORDS)
        .collect::<Vec<_>>()
        .join(" ")
}

fn first_piece<'a>(text: &'a str, delimiter: &str) -> &'a str {
    text.split(delimiter).next().unwrap_or(text)
}

/// Scans left to right; at each position lead-ins are tried in order and the first
/// one followed by a valid joiner and title text wins. Returns the raw title text.
fn find_titled_lead_in<'a>(
    sentence: &'a str,
    lead_ins: &[&str],
    joiner: Joiner,
) -> Option<&'a str> {
    for (start, _) in sentence.char_indices() {
        let rest = &sentence[start..];
        for lead_in in lead_ins {
            if !starts_with_ignore_ascii_case(rest, lead_in) {
                continue;
            }
            let after_lead_in = &rest[lead_in.len()..];
            let title_start = match joiner {
                Joiner::Separator => after_separator(after_lead_in),
                Joiner::Whitespace => after_required_whitespace(after_lead_in),
            };
            if let Some(title) = title_start.and_then(title_run) {
                return Some(title);
            }
        }
    }
    None
}

fn starts_with_ignore_ascii_case(text: &str, prefix: &str) -> bool {
    text.len() >= prefix.len()
        && text.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
}

/// The title region after `\s*[:-]\s*`. Leading whitespace is kept so that
/// `title_run` can fall back to it when no other title character follows.
fn after_separator(text: &str) -> Option<&str> {
    let text = text.trim_start_matches(is_text_whitespace);
    let rest = text.strip_prefix(':').or_else(|| text.strip_prefix('-'))?;
    Some(rest)
}

/// The title region after `\s+`, where at least one whitespace character must remain
/// consumed by the joiner.
fn after_required_whitespace(text: &str) -> Option<&str> {
    let first = text.chars().next().filter(|c| is_text_whitespace(*c))?;
    Some(&text[first.len_utf8()..])
}

/// Longest non-empty run of title characters, allowing leading whitespace that is
/// itself a title character (a space).
fn title_run(text: &str) -> Option<&str> {
    let lead = text.len() - text.trim_start_matches(is_text_whitespace).len();
    let body = &text[lead..];
    let body_len = body
        .char_indices()
        .find(|(_, c)| !is_title_char(*c))
        .map(|(idx, _)| idx)
        .unwrap_or(body.len());

    if body_len > 0 {
        return Some(&body[..body_len]);
    }
    // Nothing after the whitespace; a space inside it can still be the title.
    text[..lead].find(' ').map(|idx| &text[idx..idx + 1])
}
