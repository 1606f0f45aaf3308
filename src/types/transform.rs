//! Text transform selectors

use serde::{Deserialize, Serialize};

/// The four deterministic transforms a controller can apply to its text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextTransform {
    /// Uppercase every character
    UppercaseAll,
    /// Lowercase every character
    LowercaseAll,
    /// Capitalize the first letter of each word run, lowercase the rest
    TitleCase,
    /// Collapse whitespace runs, trim ends, keep at most one blank line
    CleanWhitespace,
}

impl std::fmt::Display for TextTransform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TextTransform::UppercaseAll => "UPPERCASE_ALL",
            TextTransform::LowercaseAll => "LOWERCASE_ALL",
            TextTransform::TitleCase => "TITLE_CASE",
            TextTransform::CleanWhitespace => "CLEAN_WHITESPACE",
        };
        write!(f, "{}", name)
    }
}
