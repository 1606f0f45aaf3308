//! Stop-word set for keyword ranking
//!
//! A closed list of common English function words. Words on this list
//! never enter the keyword frequency table; they still count toward
//! word totals and lexical density.

use lazy_static::lazy_static;
use std::collections::HashSet;

/// The stop-word list, lowercase, apostrophe forms included
pub const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "aren't", "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
    "but", "by", "can", "cannot", "could", "couldn't", "did", "didn't", "do", "does", "doesn't",
    "doing", "don't", "down", "during", "each", "few", "for", "from", "further", "had", "hadn't",
    "has", "hasn't", "have", "haven't", "having", "he", "he'd", "he'll", "he's", "her", "here",
    "here's", "hers", "herself", "him", "himself", "his", "how", "how's", "i", "i'd", "i'll",
    "i'm", "i've", "if", "in", "into", "is", "isn't", "it", "it's", "its", "itself", "let's",
    "me", "more", "most", "mustn't", "my", "myself", "no", "nor", "not", "of", "off", "on",
    "once", "only", "or", "other", "ought", "our", "ours", "ourselves", "out", "over", "own",
    "same", "shan't", "she", "she'd", "she'll", "she's", "should", "shouldn't", "so", "some",
    "such", "than", "that", "that's", "the", "their", "theirs", "them", "themselves", "then",
    "there", "there's", "these", "they", "they'd", "they'll", "they're", "they've", "this",
    "those", "through", "to", "too", "under", "until", "up", "very", "was", "wasn't", "we",
    "we'd", "we'll", "we're", "we've", "were", "weren't", "what", "what's", "when", "when's",
    "where", "where's", "which", "while", "who", "who's", "whom", "why", "why's", "with",
    "won't", "would", "wouldn't", "you", "you'd", "you'll", "you're", "you've", "your", "yours",
    "yourself", "yourselves",
];

lazy_static! {
    static ref STOP_WORD_SET: HashSet<&'static str> = STOP_WORDS.iter().copied().collect();
}

/// Is this (already lowercased) word on the stop list?
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORD_SET.contains(word)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_function_words_are_stopped() {
        for word in ["the", "and", "it", "is", "of"] {
            assert!(is_stop_word(word), "{} should be a stop word", word);
        }
    }

    #[test]
    fn test_contractions_are_stopped() {
        assert!(is_stop_word("don't"));
        assert!(is_stop_word("it's"));
        assert!(is_stop_word("they've"));
    }

    #[test]
    fn test_content_words_pass() {
        for word in ["fox", "analysis", "quick", "keyboard"] {
            assert!(!is_stop_word(word), "{} should not be a stop word", word);
        }
    }

    #[test]
    fn test_lookup_is_case_sensitive_by_contract() {
        // Callers lowercase before asking; the set itself stays lowercase.
        assert!(!is_stop_word("The"));
    }

    #[test]
    fn test_no_duplicates_in_list() {
        use std::collections::HashSet;
        let unique: HashSet<_> = STOP_WORDS.iter().collect();
        assert_eq!(unique.len(), STOP_WORDS.len());
    }
}
