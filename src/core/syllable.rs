//! Approximate syllable counting
//!
//! Drives the Flesch-Kincaid grade. This is a spelling heuristic, not a
//! phonetic dictionary: the contract is deterministic reproducibility,
//! not accuracy on irregular English.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Trailing silent-e patterns. 'l' stays out of the consonant class so
    // "-le" endings keep their syllable ("apple", "table").
    static ref RE_SILENT_TAIL: Regex = Regex::new(r"(?:[^laeiouy]es|ed|[^laeiouy]e)$").unwrap();

    static ref RE_LEADING_Y: Regex = Regex::new(r"^y").unwrap();

    /// Maximal vowel runs of length 1-2; a run of three vowels counts twice
    static ref RE_VOWEL_RUN: Regex = Regex::new(r"[aeiouy]{1,2}").unwrap();
}

/// Count syllables in one word token. Always at least 1.
pub fn count_syllables(word: &str) -> usize {
    let word = word.to_lowercase();
    if word.chars().count() <= 3 {
        return 1;
    }
    let word = RE_SILENT_TAIL.replace(&word, "");
    let word = RE_LEADING_Y.replace(&word, "");
    RE_VOWEL_RUN.find_iter(&word).count().max(1)
}

// =============================================================================
// TESTS
// =============================================================================
