//! Debounced analysis controller
//!
//! Trailing-edge debounce over the analysis engine: every update
//! replaces the current text and restarts a quiet-interval countdown;
//! only a countdown that survives untouched commits an analysis. Last
//! write wins, and at most one countdown is outstanding per controller.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use log::{debug, trace};
use tokio::task::JoinHandle;

use crate::core::analyzer::TextAnalyzer;
use crate::core::transform::apply_transform;
use crate::core::fingerprint;
use crate::types::{AnalysisSnapshot, TextTransform};
use crate::QUIET_INTERVAL_MS;

/// A single cancellable deferred callback
///
/// Arming replaces any pending countdown; a cancelled countdown never
/// fires. Requires a tokio runtime context.
#[derive(Debug, Default)]
pub struct DebounceTimer {
    handle: Option<JoinHandle<()>>,
}

impl DebounceTimer {
    /// Create an idle timer
    pub fn new() -> Self {
        Self { handle: None }
    }

    /// Cancel any pending countdown and arm a new one
    pub fn arm<F>(&mut self, quiet: Duration, callback: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel();
        self.handle = Some(tokio::spawn(async move {
            tokio::time::sleep(quiet).await;
            callback();
        }));
    }

    /// Cancel the pending countdown, if any
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    /// Is a countdown currently armed?
    ///
    /// Best-effort: a countdown that already fired still reports armed
    /// until the next arm or cancel.
    pub fn is_armed(&self) -> bool {
        self.handle.as_ref().map(|h| !h.is_finished()).unwrap_or(false)
    }
}

impl Drop for DebounceTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Controller state shared with the armed countdown
#[derive(Debug)]
struct Inner {
    analyzer: TextAnalyzer,
    current_text: String,
    committed_text: String,
    committed: AnalysisSnapshot,
    busy: bool,
    /// Bumped on every update; a countdown only commits if it still
    /// matches, so a superseded countdown can never publish stale text
    generation: u64,
    analysis_count: u64,
}

impl Inner {
    fn commit(&mut self) {
        self.committed_text = self.current_text.clone();
        let (stats, keywords) = self.analyzer.analyze(&self.committed_text);
        self.committed =
            AnalysisSnapshot::new(fingerprint(&self.committed_text), stats, keywords, false);
        self.busy = false;
        self.analysis_count += 1;
        debug!(
            "committed analysis #{} ({} words, {} keywords)",
            self.analysis_count,
            self.committed.stats.words,
            self.committed.keywords.len()
        );
    }
}

/// Debounced wrapper around the analysis engine
///
/// `update` and `transform` are synchronous and never block; the engine
/// runs on a tokio task after the quiet interval elapses with no newer
/// update. Must live inside a tokio runtime.
#[derive(Debug)]
pub struct DebouncedAnalyzer {
    inner: Arc<Mutex<Inner>>,
    timer: DebounceTimer,
    quiet: Duration,
}

impl Default for DebouncedAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl DebouncedAnalyzer {
    /// Create a controller with the default quiet interval
    pub fn new() -> Self {
        Self::with_quiet_interval(Duration::from_millis(QUIET_INTERVAL_MS))
    }

    /// Create a controller with a custom quiet interval
    pub fn with_quiet_interval(quiet: Duration) -> Self {
        let analyzer = TextAnalyzer::new();
        let (stats, keywords) = analyzer.analyze("");
        let committed = AnalysisSnapshot::new(fingerprint(""), stats, keywords, false);
        Self {
            inner: Arc::new(Mutex::new(Inner {
                analyzer,
                current_text: String::new(),
                committed_text: String::new(),
                committed,
                busy: false,
                generation: 0,
                analysis_count: 0,
            })),
            timer: DebounceTimer::new(),
            quiet,
        }
    }

    /// Replace the current text and restart the quiet countdown
    pub fn update(&mut self, text: impl Into<String>) {
        let generation = {
            let mut inner = self.inner.lock().unwrap();
            inner.current_text = text.into();
            inner.busy = true;
            inner.generation += 1;
            inner.generation
        };
        trace!("update armed countdown (generation {})", generation);

        let shared = Arc::clone(&self.inner);
        self.timer.arm(self.quiet, move || {
            let mut inner = shared.lock().unwrap();
            if inner.generation == generation {
                inner.commit();
            }
        });
    }

    /// Transform the current text, then behave exactly like `update`
    pub fn transform(&mut self, kind: TextTransform) {
        let transformed = {
            let inner = self.inner.lock().unwrap();
            apply_transform(kind, &inner.current_text)
        };
        debug!("applied {} transform", kind);
        self.update(transformed);
    }

    /// The committed analysis plus the live busy flag
    pub fn current_result(&self) -> AnalysisSnapshot {
        let inner = self.inner.lock().unwrap();
        let mut snapshot = inner.committed.clone();
        snapshot.busy = inner.busy;
        snapshot
    }

    /// The latest raw text, whether or not it has been analyzed yet
    pub fn current_text(&self) -> String {
        self.inner.lock().unwrap().current_text.clone()
    }

    /// The text the committed analysis was computed from
    pub fn committed_text(&self) -> String {
        self.inner.lock().unwrap().committed_text.clone()
    }

    /// True while an edit is waiting out the quiet interval
    pub fn is_busy(&self) -> bool {
        self.inner.lock().unwrap().busy
    }

    /// How many times the engine has run since construction
    pub fn analysis_count(&self) -> u64 {
        self.inner.lock().unwrap().analysis_count
    }

    /// The configured quiet interval
    pub fn quiet_interval(&self) -> Duration {
        self.quiet
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_QUIET: Duration = Duration::from_millis(50);

    fn test_controller() -> DebouncedAnalyzer {
        DebouncedAnalyzer::with_quiet_interval(TEST_QUIET)
    }

    async fn settle() {
        tokio::time::sleep(TEST_QUIET + Duration::from_millis(50)).await;
    }

    #[tokio::test]
    async fn test_initial_state_is_settled_and_empty() {
        let controller = test_controller();
        let result = controller.current_result();
        assert!(!result.busy);
        assert_eq!(result.stats.words, 0);
        assert!(result.keywords.is_empty());
        assert_eq!(controller.analysis_count(), 0);
    }

    #[tokio::test]
    async fn test_update_sets_busy_immediately() {
        let mut controller = test_controller();
        controller.update("hello");
        assert!(controller.is_busy());
        assert_eq!(controller.current_text(), "hello");
        // Nothing committed yet
        assert_eq!(controller.committed_text(), "");
    }

    #[tokio::test]
    async fn test_commit_after_quiet_interval() {
        let mut controller = test_controller();
        controller.update("hello world");
        settle().await;

        let result = controller.current_result();
        assert!(!result.busy);
        assert_eq!(result.stats.words, 2);
        assert_eq!(controller.committed_text(), "hello world");
        assert_eq!(controller.analysis_count(), 1);
    }

    #[tokio::test]
    async fn test_rapid_updates_commit_once_with_last_value() {
        let mut controller = test_controller();
        controller.update("first");
        controller.update("second");
        controller.update("third value");
        settle().await;

        assert_eq!(controller.analysis_count(), 1);
        assert_eq!(controller.committed_text(), "third value");
        assert_eq!(controller.current_result().stats.words, 2);
    }

    #[tokio::test]
    async fn test_transform_reuses_update_path() {
        let mut controller = test_controller();
        controller.update("hello world");
        settle().await;

        controller.transform(TextTransform::UppercaseAll);
        assert!(controller.is_busy());
        assert_eq!(controller.current_text(), "HELLO WORLD");
        settle().await;

        assert_eq!(controller.committed_text(), "HELLO WORLD");
        assert_eq!(controller.analysis_count(), 2);
    }

    #[tokio::test]
    async fn test_snapshot_fingerprint_tracks_committed_text() {
        let mut controller = test_controller();
        controller.update("tracked");
        settle().await;

        let result = controller.current_result();
        assert_eq!(result.fingerprint, fingerprint("tracked"));
    }

    #[tokio::test]
    async fn test_timer_cancel_prevents_callback() {
        let fired = Arc::new(Mutex::new(false));
        let mut timer = DebounceTimer::new();

        let flag = Arc::clone(&fired);
        timer.arm(TEST_QUIET, move || {
            *flag.lock().unwrap() = true;
        });
        timer.cancel();
        settle().await;

        assert!(!*fired.lock().unwrap());
        assert!(!timer.is_armed());
    }

    #[tokio::test]
    async fn test_timer_rearm_replaces_countdown() {
        let counter = Arc::new(Mutex::new(0u32));
        let mut timer = DebounceTimer::new();

        for _ in 0..3 {
            let counter = Arc::clone(&counter);
            timer.arm(TEST_QUIET, move || {
                *counter.lock().unwrap() += 1;
            });
        }
        settle().await;

        assert_eq!(*counter.lock().unwrap(), 1);
    }
}
