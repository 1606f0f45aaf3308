//! Text analysis engine
//!
//! Pure function from raw text to statistics and ranked keywords.
//! No state, no I/O; the same input always produces the same output,
//! so it is safe to call on every committed edit.

use std::collections::{HashMap, HashSet};

use lazy_static::lazy_static;
use regex::Regex;

use crate::core::stopwords::is_stop_word;
use crate::core::syllable::count_syllables;
use crate::types::{Keyword, TextStats};
use crate::{
    FK_BASE_OFFSET, FK_SENTENCE_WEIGHT, FK_SYLLABLE_WEIGHT, KEYWORD_LIMIT, KEYWORD_MIN_CHARS,
    READING_WORDS_PER_MINUTE, SPEAKING_WORDS_PER_MINUTE,
};

lazy_static! {
    /// Word tokens: maximal runs of letters, digits, underscore, or
    /// apostrophe bounded by word boundaries ("don't" is one token)
    static ref RE_WORD: Regex = Regex::new(r"\b[\w']+\b").unwrap();

    /// Sentence breaks: terminator runs followed by whitespace or end
    static ref RE_SENTENCE_BREAK: Regex = Regex::new(r"[.!?]+(?:\s+|$)").unwrap();

    /// Paragraph breaks: one or more newlines
    static ref RE_PARAGRAPH_BREAK: Regex = Regex::new(r"\n+").unwrap();

    /// Tokens made entirely of digits never become keywords
    static ref RE_ALL_DIGITS: Regex = Regex::new(r"^\d+$").unwrap();
}

/// The analysis engine
#[derive(Debug, Default)]
pub struct TextAnalyzer;

impl TextAnalyzer {
    /// Create a new engine
    pub fn new() -> Self {
        Self
    }

    /// Analyze text, producing statistics and up to KEYWORD_LIMIT
    /// ranked keywords. Total over all string inputs.
    pub fn analyze(&self, text: &str) -> (TextStats, Vec<Keyword>) {
        // Whitespace-only input yields all zeros, sentence floor included
        if text.trim().is_empty() {
            return (TextStats::zero(), Vec::new());
        }

        let characters = text.chars().count();
        let characters_no_spaces = text.chars().filter(|c| !c.is_whitespace()).count();

        let paragraphs = RE_PARAGRAPH_BREAK
            .split(text)
            .filter(|p| !p.trim().is_empty())
            .count();

        // One token pass feeds the word count, the syllable sum, and the
        // keyword table alike
        let tokens: Vec<&str> = RE_WORD.find_iter(text).map(|m| m.as_str()).collect();
        let words = tokens.len();

        let sentence_segments = RE_SENTENCE_BREAK
            .split(text)
            .filter(|s| !s.trim().is_empty())
            .count();
        // Floor at 1: text like "..." has no segments but is not empty
        let sentences = sentence_segments.max(1);

        let total_syllables: usize = tokens.iter().map(|t| count_syllables(t)).sum();

        let flesch_kincaid_grade = if words == 0 {
            0.0
        } else {
            let grade = FK_SENTENCE_WEIGHT * (words as f64 / sentences as f64)
                + FK_SYLLABLE_WEIGHT * (total_syllables as f64 / words as f64)
                - FK_BASE_OFFSET;
            grade.max(0.0)
        };

        let reading_time_minutes = words as f64 / READING_WORDS_PER_MINUTE;
        let speaking_time_minutes = words as f64 / SPEAKING_WORDS_PER_MINUTE;

        let (keywords, unique_words) = rank_keywords(&tokens);

        let lexical_density = if words == 0 {
            0.0
        } else {
            unique_words as f64 / words as f64 * 100.0
        };

        let stats = TextStats {
            words,
            characters,
            characters_no_spaces,
            sentences,
            paragraphs,
            reading_time_minutes,
            speaking_time_minutes,
            flesch_kincaid_grade,
            lexical_density,
        };

        (stats, keywords)
    }

    /// Statistics only, keywords discarded
    pub fn quick_stats(&self, text: &str) -> TextStats {
        self.analyze(text).0
    }
}

/// Build the keyword ranking and the unique-word count in one pass.
///
/// The frequency table preserves first-encountered order, so the stable
/// sort leaves ties in insertion order.
fn rank_keywords(tokens: &[&str]) -> (Vec<Keyword>, usize) {
    let mut unique: HashSet<String> = HashSet::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut table: Vec<Keyword> = Vec::new();

    for token in tokens {
        let lower = token.to_lowercase();
        let qualifies = !is_stop_word(&lower)
            && lower.chars().count() >= KEYWORD_MIN_CHARS
            && !RE_ALL_DIGITS.is_match(&lower);
        if qualifies {
            if let Some(&i) = index.get(&lower) {
                table[i].count += 1;
            } else {
                index.insert(lower.clone(), table.len());
                table.push(Keyword::new(lower.clone(), 1));
            }
        }
        unique.insert(lower);
    }

    table.sort_by(|a, b| b.count.cmp(&a.count));
    table.truncate(KEYWORD_LIMIT);
    (table, unique.len())
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_all_zero() {
        let analyzer = TextAnalyzer::new();
        let (stats, keywords) = analyzer.analyze("");
        assert_eq!(stats, TextStats::zero());
        assert!(keywords.is_empty());
    }

    #[test]
    fn test_whitespace_only_is_all_zero() {
        let analyzer = TextAnalyzer::new();
        for input in ["   ", "\n\n\t", " \n "] {
            let (stats, keywords) = analyzer.analyze(input);
            assert_eq!(stats, TextStats::zero(), "input {:?}", input);
            assert!(keywords.is_empty());
        }
    }

    #[test]
    fn test_fox_scenario() {
        let analyzer = TextAnalyzer::new();
        let (stats, keywords) = analyzer.analyze("The quick brown fox jumps. It runs fast!");

        assert_eq!(stats.words, 8);
        assert_eq!(stats.sentences, 2);
        assert_eq!(stats.paragraphs, 1);

        // "the" and "it" are stop words; six content words tie at count 1,
        // capped at 5 in first-encountered order
        let words: Vec<&str> = keywords.iter().map(|k| k.word.as_str()).collect();
        assert_eq!(words, vec!["quick", "brown", "fox", "jumps", "runs"]);
        assert!(keywords.iter().all(|k| k.count == 1));
    }

    #[test]
    fn test_cat_dog_bird_scenario() {
        let analyzer = TextAnalyzer::new();
        let (stats, keywords) = analyzer.analyze("Cat cat cat dog dog bird");

        assert_eq!(keywords[0], Keyword::new("cat", 3));
        assert_eq!(keywords[1], Keyword::new("dog", 2));
        assert_eq!(keywords[2], Keyword::new("bird", 1));
        assert!((stats.lexical_density - 50.0).abs() < 1e-9);
        assert_eq!(stats.sentences, 1);
    }

    #[test]
    fn test_character_counts_use_raw_text() {
        let analyzer = TextAnalyzer::new();
        let (stats, _) = analyzer.analyze("  ab cd  ");
        assert_eq!(stats.characters, 9);
        assert_eq!(stats.characters_no_spaces, 4);
    }

    #[test]
    fn test_paragraph_counting() {
        let analyzer = TextAnalyzer::new();
        let (stats, _) = analyzer.analyze("one\n\ntwo\nthree\n\n\n  \n\nfour");
        assert_eq!(stats.paragraphs, 4);
    }

    #[test]
    fn test_sentence_floor_for_terminators_only() {
        let analyzer = TextAnalyzer::new();
        let (stats, keywords) = analyzer.analyze("...");
        assert_eq!(stats.sentences, 1);
        assert_eq!(stats.words, 0);
        assert_eq!(stats.characters, 3);
        assert_eq!(stats.flesch_kincaid_grade, 0.0);
        assert_eq!(stats.lexical_density, 0.0);
        assert!(keywords.is_empty());
    }

    #[test]
    fn test_apostrophes_stay_in_tokens() {
        let analyzer = TextAnalyzer::new();
        let (stats, keywords) = analyzer.analyze("Don't don't stop");
        assert_eq!(stats.words, 3);
        // "don't" is a stop word; "stop" survives
        assert_eq!(keywords, vec![Keyword::new("stop", 1)]);
    }

    #[test]
    fn test_digit_tokens_count_as_words_not_keywords() {
        let analyzer = TextAnalyzer::new();
        let (stats, keywords) = analyzer.analyze("route 66 route 66");
        assert_eq!(stats.words, 4);
        assert_eq!(keywords, vec![Keyword::new("route", 2)]);
        // "66" still counts toward density: 2 unique forms over 4 words
        assert!((stats.lexical_density - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_single_letters_are_not_keywords() {
        let analyzer = TextAnalyzer::new();
        let (_, keywords) = analyzer.analyze("x marks x");
        assert_eq!(keywords, vec![Keyword::new("marks", 1)]);
    }

    #[test]
    fn test_flesch_kincaid_clamps_at_zero() {
        let analyzer = TextAnalyzer::new();
        // Six monosyllables in one sentence: raw grade is negative
        let (stats, _) = analyzer.analyze("Cat cat cat dog dog bird");
        assert_eq!(stats.flesch_kincaid_grade, 0.0);
    }

    #[test]
    fn test_flesch_kincaid_formula() {
        let analyzer = TextAnalyzer::new();
        // "Analysis happens repeatedly." 3 words, 1 sentence,
        // syllables: analysis=4, happens=2, repeatedly=4 -> 10
        let (stats, _) = analyzer.analyze("Analysis happens repeatedly.");
        let expected = 0.39 * 3.0 + 11.8 * (10.0 / 3.0) - 15.59;
        assert!((stats.flesch_kincaid_grade - expected).abs() < 1e-9);
    }

    #[test]
    fn test_reading_and_speaking_times() {
        let analyzer = TextAnalyzer::new();
        let (stats, _) = analyzer.analyze("one two three four five");
        assert!((stats.reading_time_minutes - 5.0 / 238.0).abs() < 1e-12);
        assert!((stats.speaking_time_minutes - 5.0 / 130.0).abs() < 1e-12);
    }

    #[test]
    fn test_keyword_cap_and_descending_order() {
        let analyzer = TextAnalyzer::new();
        let (_, keywords) =
            analyzer.analyze("alpha alpha alpha beta beta gamma delta epsilon zeta eta");
        assert_eq!(keywords.len(), 5);
        for pair in keywords.windows(2) {
            assert!(pair[0].count >= pair[1].count);
        }
        assert_eq!(keywords[0], Keyword::new("alpha", 3));
        assert_eq!(keywords[1], Keyword::new("beta", 2));
    }

    #[test]
    fn test_case_folding_merges_counts() {
        let analyzer = TextAnalyzer::new();
        let (stats, keywords) = analyzer.analyze("Rust RUST rust");
        assert_eq!(keywords, vec![Keyword::new("rust", 3)]);
        // One unique form over three words
        assert!((stats.lexical_density - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_determinism() {
        let analyzer = TextAnalyzer::new();
        let text = "The quick brown fox jumps over the lazy dog. Again!";
        assert_eq!(analyzer.analyze(text), analyzer.analyze(text));
    }

    #[test]
    fn test_enormous_single_token() {
        let analyzer = TextAnalyzer::new();
        let long_word = "a".repeat(10_000);
        let (stats, keywords) = analyzer.analyze(&long_word);
        assert_eq!(stats.words, 1);
        assert_eq!(stats.sentences, 1);
        assert_eq!(keywords.len(), 1);
        assert_eq!(keywords[0].count, 1);
    }

    #[test]
    fn test_quick_stats_matches_analyze() {
        let analyzer = TextAnalyzer::new();
        let text = "Some sample text here.";
        assert_eq!(analyzer.quick_stats(text), analyzer.analyze(text).0);
    }
}
