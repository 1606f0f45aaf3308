//! Committed analysis snapshots
//!
//! A snapshot is what `current_result()` hands back: the stats and
//! keywords computed for the last committed text, plus the live busy
//! flag so callers can tell a settled result from a stale one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{Keyword, TextStats};

/// The most recent committed analysis, plus the controller's busy flag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSnapshot {
    /// When this analysis was committed
    pub computed_at: DateTime<Utc>,
    /// SHA-256 hex of the committed text
    pub fingerprint: String,
    /// Statistics for the committed text
    pub stats: TextStats,
    /// Ranked keywords for the committed text
    pub keywords: Vec<Keyword>,
    /// True while a newer edit is waiting to be analyzed
    pub busy: bool,
}

impl AnalysisSnapshot {
    /// Create a snapshot stamped with the current time
    pub fn new(
        fingerprint: impl Into<String>,
        stats: TextStats,
        keywords: Vec<Keyword>,
        busy: bool,
    ) -> Self {
        Self {
            computed_at: Utc::now(),
            fingerprint: fingerprint.into(),
            stats,
            keywords,
            busy,
        }
    }
}
