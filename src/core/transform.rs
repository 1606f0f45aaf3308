//! Deterministic text transforms
//!
//! Pure string-to-string functions the controller applies to its
//! current text before re-arming analysis.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::types::TextTransform;

lazy_static! {
    /// Word runs for title casing
    static ref RE_TITLE_WORD: Regex = Regex::new(r"\w+").unwrap();

    /// Two or more newlines, possibly padded with horizontal whitespace
    static ref RE_BLANK_RUN: Regex = Regex::new(r"\n(?:[^\S\n]*\n)+").unwrap();

    /// One newline with horizontal padding on either side
    static ref RE_PADDED_NEWLINE: Regex = Regex::new(r"[^\S\n]*\n[^\S\n]*").unwrap();

    /// Runs of horizontal whitespace
    static ref RE_HORIZONTAL_RUN: Regex = Regex::new(r"[^\S\n]+").unwrap();
}

/// Apply one of the four transforms
pub fn apply_transform(kind: TextTransform, text: &str) -> String {
    match kind {
        TextTransform::UppercaseAll => text.to_uppercase(),
        TextTransform::LowercaseAll => text.to_lowercase(),
        TextTransform::TitleCase => title_case(text),
        TextTransform::CleanWhitespace => clean_whitespace(text),
    }
}

/// Capitalize the first letter of each word run, lowercase the rest
pub fn title_case(text: &str) -> String {
    RE_TITLE_WORD
        .replace_all(text, |caps: &Captures| {
            let mut chars = caps[0].chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .into_owned()
}

/// Collapse whitespace: single spaces within lines, trimmed ends, and
/// at most one blank line between paragraphs
pub fn clean_whitespace(text: &str) -> String {
    let text = text.trim();
    let text = RE_BLANK_RUN.replace_all(text, "\n\n");
    let text = RE_PADDED_NEWLINE.replace_all(&text, "\n");
    RE_HORIZONTAL_RUN.replace_all(&text, " ").into_owned()
}

// =============================================================================
// TESTS
// =============================================================================
