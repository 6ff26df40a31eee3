//! Progress reporting and cancellation for transcode runs
//!
//! Progress is a stream of ratios in `[0, 1]`: non-decreasing, a bounded
//! number of updates, terminating at `1.0` on success, and silent after
//! completion or failure.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Observer attached to a transcode call.
///
/// `should_cancel` is polled between frames; returning `true` aborts the
/// run best-effort. A cancelled run never yields a partial artifact.
pub trait TranscodeObserver: Send + Sync {
    /// Called with a ratio in `[0, 1]`, non-decreasing, ending at `1.0`
    fn on_progress(&self, ratio: f64);

    /// Polled between frames; return `true` to abort
    fn should_cancel(&self) -> bool {
        false
    }
}

/// Observer that ignores everything
pub struct NoOpObserver;

impl TranscodeObserver for NoOpObserver {
    fn on_progress(&self, _ratio: f64) {}
}

/// Ratio gate enforcing the progress contract over an arbitrary observer
pub struct ProgressReporter {
    observer: Arc<dyn TranscodeObserver>,
    last: Mutex<f64>,
    finished: AtomicBool,
}

/// Minimum ratio step that produces an observer call; bounds the total
/// number of updates per run.
const MIN_STEP: f64 = 0.005;

impl ProgressReporter {
    pub fn new(observer: Arc<dyn TranscodeObserver>) -> Self {
        Self {
            observer,
            last: Mutex::new(0.0),
            finished: AtomicBool::new(false),
        }
    }

    /// Report a ratio. Values below the last reported ratio, values after
    /// completion, and sub-step increments are dropped; the ratio is
    /// capped just under 1.0 so only [`ProgressReporter::finish`] emits it.
    pub fn report(&self, ratio: f64) {
        if self.finished.load(Ordering::Acquire) || !ratio.is_finite() {
            return;
        }
        let capped = ratio.clamp(0.0, 0.999);
        let mut last = self.last.lock().unwrap_or_else(|e| e.into_inner());
        if capped < *last + MIN_STEP {
            return;
        }
        *last = capped;
        drop(last);
        self.observer.on_progress(capped);
    }

    /// Map a sub-phase fraction into the `[lo, hi]` band of the run
    pub fn report_phase(&self, lo: f64, hi: f64, fraction: f64) {
        self.report(lo + fraction.clamp(0.0, 1.0) * (hi - lo));
    }

    /// Emit the terminal `1.0` and silence all further reports
    pub fn finish(&self) {
        if self.finished.swap(true, Ordering::AcqRel) {
            return;
        }
        self.observer.on_progress(1.0);
    }

    /// Silence the reporter without emitting a terminal ratio
    pub fn fail(&self) {
        self.finished.store(true, Ordering::Release);
    }

    /// Whether the observer has requested cancellation
    pub fn cancelled(&self) -> bool {
        self.observer.should_cancel()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    struct Capture {
        ratios: Mutex<Vec<f64>>,
        cancel: AtomicBool,
        polls: AtomicUsize,
    }

    impl Capture {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                ratios: Mutex::new(Vec::new()),
                cancel: AtomicBool::new(false),
                polls: AtomicUsize::new(0),
            })
        }

        fn ratios(&self) -> Vec<f64> {
            self.ratios.lock().unwrap().clone()
        }
    }

    impl TranscodeObserver for Capture {
        fn on_progress(&self, ratio: f64) {
            self.ratios.lock().unwrap().push(ratio);
        }

        fn should_cancel(&self) -> bool {
            self.polls.fetch_add(1, Ordering::Relaxed);
            self.cancel.load(Ordering::Relaxed)
        }
    }

    #[test]
    fn test_monotonic_and_terminates_at_one() {
        let capture = Capture::new();
        let reporter = ProgressReporter::new(capture.clone());
        reporter.report(0.1);
        reporter.report(0.05); // regression dropped
        reporter.report(0.5);
        reporter.finish();

        let ratios = capture.ratios();
        assert_eq!(*ratios.last().unwrap(), 1.0);
        for pair in ratios.windows(2) {
            assert!(pair[1] >= pair[0]);
        }
    }

    #[test]
    fn test_silent_after_finish() {
        let capture = Capture::new();
        let reporter = ProgressReporter::new(capture.clone());
        reporter.finish();
        reporter.report(0.9);
        reporter.finish();
        assert_eq!(capture.ratios(), vec![1.0]);
    }

    #[test]
    fn test_silent_after_fail() {
        let capture = Capture::new();
        let reporter = ProgressReporter::new(capture.clone());
        reporter.report(0.3);
        reporter.fail();
        reporter.report(0.9);
        reporter.finish();
        assert!(capture.ratios().iter().all(|r| *r < 1.0));
    }

    #[test]
    fn test_bounded_update_count() {
        let capture = Capture::new();
        let reporter = ProgressReporter::new(capture.clone());
        for i in 0..100_000 {
            reporter.report(i as f64 / 100_000.0);
        }
        reporter.finish();
        // Steps of MIN_STEP bound the call count
        assert!(capture.ratios().len() <= 201);
    }

    #[test]
    fn test_phase_band_mapping() {
        let capture = Capture::new();
        let reporter = ProgressReporter::new(capture.clone());
        reporter.report_phase(0.5, 0.9, 0.5);
        let ratios = capture.ratios();
        assert!((ratios[0] - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_cancellation_polls_observer() {
        let capture = Capture::new();
        let reporter = ProgressReporter::new(capture.clone());
        assert!(!reporter.cancelled());
        capture.cancel.store(true, Ordering::Relaxed);
        assert!(reporter.cancelled());
    }
}
