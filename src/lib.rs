//! Word Lab: text statistics, readability, and keyword signals
//!
//! The core path: raw text → TextAnalyzer → (TextStats, keywords),
//! wrapped by DebouncedAnalyzer so interactive edits re-analyze only
//! after a quiet period.

pub mod core;
pub mod types;

// =============================================================================
// READING RATES
// =============================================================================

/// Average adult silent reading rate (words per minute)
pub const READING_WORDS_PER_MINUTE: f64 = 238.0;

/// Average speaking rate (words per minute)
pub const SPEAKING_WORDS_PER_MINUTE: f64 = 130.0;

// =============================================================================
// FLESCH-KINCAID GRADE COEFFICIENTS
// =============================================================================

/// Weight on average sentence length (words per sentence)
pub const FK_SENTENCE_WEIGHT: f64 = 0.39;

/// Weight on average word complexity (syllables per word)
pub const FK_SYLLABLE_WEIGHT: f64 = 11.8;

/// Constant offset subtracted from the weighted sum
pub const FK_BASE_OFFSET: f64 = 15.59;

// =============================================================================
// KEYWORD RANKING
// =============================================================================

/// Maximum number of ranked keywords returned per analysis
pub const KEYWORD_LIMIT: usize = 5;

/// Minimum characters for a keyword candidate (single letters are noise)
pub const KEYWORD_MIN_CHARS: usize = 2;

// =============================================================================
// DEBOUNCE
// =============================================================================

/// Quiet interval before a pending edit is committed and analyzed (milliseconds)
pub const QUIET_INTERVAL_MS: u64 = 500;

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
