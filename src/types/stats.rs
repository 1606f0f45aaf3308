//! Descriptive statistics for a body of text

use serde::{Deserialize, Serialize};

/// Statistics computed fresh on every analysis pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStats {
    /// Count of word tokens
    pub words: usize,
    /// Length of the raw text in Unicode scalar values
    pub characters: usize,
    /// Characters excluding all whitespace
    pub characters_no_spaces: usize,
    /// Sentence segments; at least 1 for any non-blank text
    pub sentences: usize,
    /// Non-blank paragraph segments
    pub paragraphs: usize,
    /// Estimated silent reading time (words / 238)
    pub reading_time_minutes: f64,
    /// Estimated speaking time (words / 130)
    pub speaking_time_minutes: f64,
    /// Flesch-Kincaid grade level, clamped to 0 minimum
    pub flesch_kincaid_grade: f64,
    /// Unique word forms as a percentage of total words (0-100)
    pub lexical_density: f64,
}

impl TextStats {
    /// All-zero stats, the result for empty or whitespace-only input
    pub fn zero() -> Self {
        Self {
            words: 0,
            characters: 0,
            characters_no_spaces: 0,
            sentences: 0,
            paragraphs: 0,
            reading_time_minutes: 0.0,
            speaking_time_minutes: 0.0,
            flesch_kincaid_grade: 0.0,
            lexical_density: 0.0,
        }
    }
}

impl Default for TextStats {
    fn default() -> Self {
        Self::zero()
    }
}
