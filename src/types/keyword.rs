//! Ranked keyword entries

use serde::{Deserialize, Serialize};

/// One entry in the ranked keyword list
///
/// `word` is always lowercase; `count` is at least 1. Lists are capped
/// at KEYWORD_LIMIT, sorted descending by count, ties kept in
/// first-encountered order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyword {
    /// Lowercase word form
    pub word: String,
    /// Occurrences in the analyzed text
    pub count: usize,
}

impl Keyword {
    /// Create a new keyword entry
    pub fn new(word: impl Into<String>, count: usize) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}
