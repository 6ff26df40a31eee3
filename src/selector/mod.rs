//! Interactive time-range selector
//!
//! Owns playback position, selection bounds, and the zoomable viewport,
//! and turns pointer/gesture events into a committed `(start, end)` time
//! range. The selector is clock-injected: gesture entry points take an
//! [`Instant`] and the long-press timer fires from [`TimeRangeSelector::tick`],
//! so every transition is deterministic under test.

use std::sync::Arc;
use std::time::Instant;

use tracing::debug;

use crate::domain::model::{duration_is_known, Selection, ViewportWindow, MIN_SPAN_SECONDS};

pub mod gesture;
pub mod viewport;

pub use gesture::{DragHandle, GestureState};
pub use viewport::PanDirection;

use gesture::{TapRecord, LONG_PRESS_DELAY, LONG_PRESS_SPAN_SECONDS};

/// Initial selection span after metadata loads, in seconds
pub const DEFAULT_SPAN_SECONDS: f64 = 3.0;
/// Default UI-level cap on the selected span, in seconds
pub const DEFAULT_MAX_GIF_DURATION: f64 = 30.0;
/// Fallback timeline track width before the host reports a real one
const DEFAULT_TRACK_WIDTH_PX: f64 = 1000.0;

/// Listener for committed selector events.
///
/// `on_time_select` fires on every committed selection change; viewport
/// and zoom changes are presentation-only and never fire it.
/// `on_metadata` fires exactly once per video source, when probing
/// completes.
pub trait SelectionListener: Send + Sync {
    fn on_time_select(&self, start: f64, end: f64);
    fn on_metadata(&self, duration: f64, width: u32, height: u32) {
        let _ = (duration, width, height);
    }
}

/// Gesture-driven time-range selector over a zoomable timeline.
///
/// One instance per video source; [`TimeRangeSelector::on_metadata_loaded`]
/// fully resets selection, viewport, and gesture state for the new source.
pub struct TimeRangeSelector {
    duration: f64,
    playhead: f64,
    selection: Option<Selection>,
    viewport: ViewportWindow,
    max_gif_duration: f64,
    track_width_px: f64,
    gesture: GestureState,
    last_tap: Option<TapRecord>,
    listeners: Vec<Arc<dyn SelectionListener>>,
}

impl TimeRangeSelector {
    /// Create a selector with default caps. Mutations are no-ops until
    /// metadata arrives.
    pub fn new() -> Self {
        Self {
            duration: f64::NAN,
            playhead: 0.0,
            selection: None,
            viewport: ViewportWindow::full(),
            max_gif_duration: DEFAULT_MAX_GIF_DURATION,
            track_width_px: DEFAULT_TRACK_WIDTH_PX,
            gesture: GestureState::Idle,
            last_tap: None,
            listeners: Vec::new(),
        }
    }

    /// Override the UI-level span cap
    pub fn with_max_gif_duration(mut self, seconds: f64) -> Self {
        self.max_gif_duration = seconds.max(MIN_SPAN_SECONDS);
        self
    }

    /// Set the timeline track width used for pixel-to-percent mapping
    pub fn with_track_width(mut self, px: f64) -> Self {
        self.set_track_width(px);
        self
    }

    /// Update the track width (host resize)
    pub fn set_track_width(&mut self, px: f64) {
        if px.is_finite() && px > 0.0 {
            self.track_width_px = px;
        }
    }

    /// Register a listener for committed selection and metadata events
    pub fn add_listener(&mut self, listener: Arc<dyn SelectionListener>) {
        self.listeners.push(listener);
    }

    // ── Accessors ──

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn playhead(&self) -> f64 {
        self.playhead
    }

    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    pub fn viewport(&self) -> ViewportWindow {
        self.viewport
    }

    pub fn zoom_level(&self) -> f64 {
        self.viewport.zoom_level()
    }

    pub fn gesture_state(&self) -> GestureState {
        self.gesture
    }

    pub fn max_gif_duration(&self) -> f64 {
        self.max_gif_duration
    }

    fn metadata_known(&self) -> bool {
        duration_is_known(self.duration)
    }

    // ── Source lifecycle ──

    /// Accept probed metadata for a (new) source. Resets selection,
    /// viewport, playhead, and gesture state. A non-finite or
    /// non-positive duration marks metadata as unknown and leaves every
    /// subsequent mutation a no-op.
    pub fn on_metadata_loaded(&mut self, duration: f64, width: u32, height: u32) {
        self.gesture = GestureState::Idle;
        self.last_tap = None;
        self.playhead = 0.0;
        self.viewport = ViewportWindow::full();

        if !duration_is_known(duration) {
            debug!("Metadata reported unknown duration {duration}; selector disabled");
            self.duration = f64::NAN;
            self.selection = None;
            return;
        }

        self.duration = duration;
        let span = DEFAULT_SPAN_SECONDS.min(self.max_gif_duration).min(duration);
        let initial = Selection::clamped(0.0, span, duration, self.max_gif_duration);
        self.selection = None;
        for listener in &self.listeners {
            listener.on_metadata(duration, width, height);
        }
        self.commit(initial);
    }

    // ── Playback ──

    /// Clamp `time` into `[0, duration]` and move the playhead. Does not
    /// alter the selection.
    pub fn seek(&mut self, time: f64) {
        if !self.metadata_known() || !time.is_finite() {
            return;
        }
        self.playhead = time.clamp(0.0, self.duration);
    }

    // ── Gestures ──

    /// Pointer-down at `client_x` pixels from the track's left edge.
    /// While one pointer holds the gesture, presses from other pointers
    /// are ignored.
    pub fn begin_press(&mut self, pointer_id: u64, client_x: f64, now: Instant) {
        if !self.metadata_known() || !client_x.is_finite() {
            return;
        }
        if !self.gesture.is_idle() {
            return;
        }

        let double_tap = self
            .last_tap
            .map(|tap| tap.is_double_tap(client_x, now))
            .unwrap_or(false);

        if double_tap {
            if let Some(sel) = self.selection {
                // Second tap grabs the whole selection; the offset keeps the
                // grab point fixed relative to the selection start.
                self.last_tap = None;
                let press_percent = self.px_to_percent(client_x);
                let start_percent = viewport::time_to_percent_unbounded(
                    sel.start,
                    self.duration,
                    &self.viewport,
                );
                self.gesture = GestureState::Dragging {
                    pointer_id,
                    handle: DragHandle::Whole,
                    offset_percent: press_percent - start_percent,
                };
                debug!("Double-tap: dragging whole selection");
                return;
            }
        }

        self.last_tap = Some(TapRecord {
            x: client_x,
            at: now,
        });
        self.gesture = GestureState::ArmedLongPress {
            pointer_id,
            origin_x: client_x,
            deadline: Some(now + LONG_PRESS_DELAY),
        };
    }

    /// Pointer movement for the captured pointer
    pub fn move_press(&mut self, client_x: f64, _now: Instant) {
        if !self.metadata_known() || !client_x.is_finite() {
            return;
        }
        match self.gesture {
            GestureState::Idle => {}
            GestureState::ArmedLongPress {
                pointer_id,
                origin_x,
                deadline,
            } => {
                if deadline.is_some() && (client_x - origin_x).abs() > gesture::DRAG_SLOP_PX {
                    // Disarm: the eventual release becomes a plain seek
                    self.gesture = GestureState::ArmedLongPress {
                        pointer_id,
                        origin_x,
                        deadline: None,
                    };
                }
            }
            GestureState::Dragging {
                handle,
                offset_percent,
                ..
            } => self.drag_to(client_x, handle, offset_percent),
        }
    }

    /// Fire the long-press timer if its deadline has passed. Hosts call
    /// this from their frame/timer loop; it is a no-op in every other
    /// state.
    pub fn tick(&mut self, now: Instant) {
        let GestureState::ArmedLongPress {
            pointer_id,
            origin_x,
            deadline: Some(deadline),
        } = self.gesture
        else {
            return;
        };
        if now < deadline {
            return;
        }

        // Long-press: brand-new ~1s selection anchored at the press time,
        // continued motion drives the end bound.
        let anchor = self.percent_to_time(self.px_to_percent(origin_x));
        let fresh = Selection::clamped(
            anchor,
            anchor + LONG_PRESS_SPAN_SECONDS,
            self.duration,
            self.max_gif_duration,
        );
        debug!("Long-press fired: new selection {fresh}");
        self.commit(fresh);
        self.playhead = fresh.start;
        self.gesture = GestureState::Dragging {
            pointer_id,
            handle: DragHandle::End,
            offset_percent: 0.0,
        };
    }

    /// Pointer-up. If neither a drag nor a long-press ever activated, the
    /// original pointer-down position is interpreted as a plain seek.
    pub fn end_press(&mut self, _now: Instant) {
        match self.gesture {
            GestureState::Idle => {}
            GestureState::ArmedLongPress { origin_x, .. } => {
                let time = self.percent_to_time(self.px_to_percent(origin_x));
                self.gesture = GestureState::Idle;
                self.seek(time);
            }
            GestureState::Dragging { .. } => {
                self.gesture = GestureState::Idle;
            }
        }
    }

    /// Pointer-cancel: drop the gesture without seeking
    pub fn cancel_press(&mut self) {
        self.gesture = GestureState::Idle;
    }

    fn drag_to(&mut self, client_x: f64, handle: DragHandle, offset_percent: f64) {
        let Some(sel) = self.selection else { return };
        let percent = self.px_to_percent(client_x);

        let updated = match handle {
            DragHandle::Start => {
                let time = self.percent_to_time(percent);
                let new_start = time.min(sel.end - MIN_SPAN_SECONDS).max(0.0);
                self.playhead = new_start;
                Selection {
                    start: new_start,
                    end: sel.end,
                }
            }
            DragHandle::End => {
                let time = self.percent_to_time(percent);
                let max_end = (sel.start + self.max_gif_duration).min(self.duration);
                let new_end = time.max(sel.start + MIN_SPAN_SECONDS).min(max_end);
                self.playhead = new_end;
                Selection {
                    start: sel.start,
                    end: new_end,
                }
            }
            DragHandle::Whole => {
                let span = sel.span();
                let adjusted = percent - offset_percent;
                let target = self.percent_to_time(adjusted);
                let new_start = target.clamp(0.0, (self.duration - span).max(0.0));
                let new_end = (new_start + span)
                    .min(new_start + self.max_gif_duration)
                    .min(self.duration);
                self.playhead = new_start;
                Selection {
                    start: new_start,
                    end: new_end,
                }
            }
        };
        self.commit(updated);
    }

    // ── Viewport ──

    /// Double the zoom level, keeping the focal point (normalized `[0,1]`)
    /// at the same relative window position. Presentation-only; never
    /// fires the selection callback.
    pub fn zoom_in(&mut self, focal_normalized: f64) {
        if !self.metadata_known() {
            return;
        }
        self.viewport = viewport::zoom_to(
            &self.viewport,
            self.viewport.zoom_level() * 2.0,
            focal_normalized,
        );
    }

    /// Halve the zoom level about the window center
    pub fn zoom_out(&mut self) {
        let center = (self.viewport.view_start + self.viewport.view_end) / 2.0;
        self.zoom_out_at(center);
    }

    /// Halve the zoom level, preserving the given focal point
    pub fn zoom_out_at(&mut self, focal_normalized: f64) {
        if !self.metadata_known() {
            return;
        }
        self.viewport = viewport::zoom_to(
            &self.viewport,
            self.viewport.zoom_level() / 2.0,
            focal_normalized,
        );
    }

    /// Shift the viewport by 25% of its width; no-op at zoom level 1
    pub fn pan(&mut self, direction: PanDirection) {
        if !self.metadata_known() {
            return;
        }
        self.viewport = viewport::pan(&self.viewport, direction);
    }

    /// Zoom the viewport to the selection plus symmetric padding
    pub fn focus_on_selection(&mut self) {
        if !self.metadata_known() {
            return;
        }
        if let Some(sel) = self.selection {
            self.viewport = viewport::focus_on(&sel, self.duration);
        }
    }

    // ── Direct selection ──

    /// Select `[0, span]` clamped to the caps (quick-selection buttons)
    pub fn select_span(&mut self, span_seconds: f64) {
        if !self.metadata_known() || !span_seconds.is_finite() || span_seconds <= 0.0 {
            return;
        }
        let sel = Selection::clamped(0.0, span_seconds, self.duration, self.max_gif_duration);
        self.playhead = 0.0;
        self.commit(sel);
    }

    /// Restore the default initial selection
    pub fn reset_selection(&mut self) {
        self.select_span(DEFAULT_SPAN_SECONDS);
    }

    // ── Coordinate mapping ──

    /// Map an absolute time to a viewport-relative percent; out-of-view
    /// times return the off-screen sentinels (-10 / 110)
    pub fn time_to_percent(&self, time: f64) -> f64 {
        if !self.metadata_known() {
            return 0.0;
        }
        viewport::time_to_percent(time, self.duration, &self.viewport)
    }

    /// Inverse mapping; the percent is clamped to `[0, 100]` first
    pub fn percent_to_time(&self, percent: f64) -> f64 {
        if !self.metadata_known() {
            return 0.0;
        }
        viewport::percent_to_time(percent, self.duration, &self.viewport)
    }

    fn px_to_percent(&self, client_x: f64) -> f64 {
        (client_x / self.track_width_px * 100.0).clamp(0.0, 100.0)
    }

    fn commit(&mut self, selection: Selection) {
        if self.selection == Some(selection) {
            return;
        }
        self.selection = Some(selection);
        for listener in &self.listeners {
            listener.on_time_select(selection.start, selection.end);
        }
    }
}

impl Default for TimeRangeSelector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::time::Duration;

    struct RecordingListener {
        selections: Mutex<Vec<(f64, f64)>>,
        metadata: Mutex<Vec<(f64, u32, u32)>>,
    }

    impl RecordingListener {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                selections: Mutex::new(Vec::new()),
                metadata: Mutex::new(Vec::new()),
            })
        }

        fn selections(&self) -> Vec<(f64, f64)> {
            self.selections.lock().unwrap().clone()
        }

        fn metadata(&self) -> Vec<(f64, u32, u32)> {
            self.metadata.lock().unwrap().clone()
        }
    }

    impl SelectionListener for RecordingListener {
        fn on_time_select(&self, start: f64, end: f64) {
            self.selections.lock().unwrap().push((start, end));
        }

        fn on_metadata(&self, duration: f64, width: u32, height: u32) {
            self.metadata.lock().unwrap().push((duration, width, height));
        }
    }

    fn ready_selector() -> (TimeRangeSelector, Arc<RecordingListener>) {
        let mut selector = TimeRangeSelector::new().with_track_width(1000.0);
        let listener = RecordingListener::new();
        selector.add_listener(listener.clone());
        selector.on_metadata_loaded(120.0, 1920, 1080);
        (selector, listener)
    }

    #[test]
    fn test_metadata_initializes_selection_and_viewport() {
        let (selector, listener) = ready_selector();
        let sel = selector.selection().unwrap();
        assert_eq!(sel.start, 0.0);
        assert_eq!(sel.end, 3.0);
        assert_eq!(selector.viewport(), ViewportWindow::full());
        assert_eq!(listener.metadata(), vec![(120.0, 1920, 1080)]);
        assert_eq!(listener.selections(), vec![(0.0, 3.0)]);
    }

    #[test]
    fn test_unknown_duration_disables_mutations() {
        let mut selector = TimeRangeSelector::new();
        let listener = RecordingListener::new();
        selector.add_listener(listener.clone());

        for bad in [f64::NAN, f64::INFINITY, 0.0, -5.0] {
            selector.on_metadata_loaded(bad, 0, 0);
            assert!(selector.selection().is_none());

            let now = Instant::now();
            selector.seek(10.0);
            selector.begin_press(1, 100.0, now);
            selector.move_press(200.0, now);
            selector.tick(now + Duration::from_secs(1));
            selector.end_press(now);
            selector.zoom_in(0.5);
            selector.pan(PanDirection::Right);
            selector.select_span(5.0);
            selector.focus_on_selection();

            assert!(selector.selection().is_none());
            assert_eq!(selector.playhead(), 0.0);
            assert_eq!(selector.viewport(), ViewportWindow::full());
        }
        assert!(listener.selections().is_empty());
        assert!(listener.metadata().is_empty());
    }

    #[test]
    fn test_seek_clamps_without_touching_selection() {
        let (mut selector, _) = ready_selector();
        selector.seek(500.0);
        assert_eq!(selector.playhead(), 120.0);
        selector.seek(-3.0);
        assert_eq!(selector.playhead(), 0.0);
        let sel = selector.selection().unwrap();
        assert_eq!((sel.start, sel.end), (0.0, 3.0));
    }

    #[test]
    fn test_plain_tap_is_seek() {
        let (mut selector, listener) = ready_selector();
        let t0 = Instant::now();
        // Press at 50% of the track = 60s at full viewport
        selector.begin_press(1, 500.0, t0);
        selector.end_press(t0 + Duration::from_millis(100));
        assert_eq!(selector.playhead(), 60.0);
        assert!(selector.gesture_state().is_idle());
        // No selection change beyond the initial commit
        assert_eq!(listener.selections().len(), 1);
    }

    #[test]
    fn test_moved_press_still_seeks_to_origin() {
        let (mut selector, _) = ready_selector();
        let t0 = Instant::now();
        selector.begin_press(1, 250.0, t0);
        // Move past the drag slop; long-press disarms
        selector.move_press(400.0, t0 + Duration::from_millis(100));
        // Deadline elapses but the timer is disarmed
        selector.tick(t0 + Duration::from_millis(600));
        assert!(!selector.gesture_state().is_dragging());
        selector.end_press(t0 + Duration::from_millis(700));
        // Seek lands at the original press position (25% of 120s)
        assert_eq!(selector.playhead(), 30.0);
    }

    #[test]
    fn test_long_press_starts_fresh_selection_and_drags_end() {
        let (mut selector, listener) = ready_selector();
        let t0 = Instant::now();
        selector.begin_press(1, 500.0, t0); // 60s
        selector.tick(t0 + Duration::from_millis(450));

        let sel = selector.selection().unwrap();
        assert_eq!(sel.start, 60.0);
        assert!((sel.span() - 1.0).abs() < 1e-9);
        assert!(matches!(
            selector.gesture_state(),
            GestureState::Dragging {
                handle: DragHandle::End,
                ..
            }
        ));

        // Continued motion drives the end bound
        selector.move_press(600.0, t0 + Duration::from_millis(500)); // 72s
        let sel = selector.selection().unwrap();
        assert_eq!(sel.start, 60.0);
        assert!((sel.end - 72.0).abs() < 1e-9);
        selector.end_press(t0 + Duration::from_millis(600));
        assert!(listener.selections().len() >= 2);
    }

    #[test]
    fn test_long_press_not_fired_before_deadline() {
        let (mut selector, _) = ready_selector();
        let t0 = Instant::now();
        selector.begin_press(1, 500.0, t0);
        selector.tick(t0 + Duration::from_millis(449));
        assert!(!selector.gesture_state().is_dragging());
    }

    #[test]
    fn test_second_pointer_ignored() {
        let (mut selector, _) = ready_selector();
        let t0 = Instant::now();
        selector.begin_press(1, 500.0, t0);
        let before = selector.gesture_state();
        selector.begin_press(2, 100.0, t0 + Duration::from_millis(50));
        assert_eq!(selector.gesture_state(), before);
        assert_eq!(selector.gesture_state().active_pointer(), Some(1));
    }

    #[test]
    fn test_double_tap_drags_whole_selection() {
        let (mut selector, _) = ready_selector();
        selector.select_span(10.0); // [0, 10]
        let t0 = Instant::now();

        selector.begin_press(1, 40.0, t0);
        selector.end_press(t0 + Duration::from_millis(50));
        selector.begin_press(1, 45.0, t0 + Duration::from_millis(200));
        assert!(matches!(
            selector.gesture_state(),
            GestureState::Dragging {
                handle: DragHandle::Whole,
                ..
            }
        ));

        // Drag right by 30% of the track: selection shifts, span preserved
        selector.move_press(345.0, t0 + Duration::from_millis(250));
        let sel = selector.selection().unwrap();
        assert!((sel.span() - 10.0).abs() < 1e-6);
        assert!(sel.start > 0.0);
        assert!(sel.end <= 120.0);
    }

    #[test]
    fn test_double_tap_requires_proximity() {
        let (mut selector, _) = ready_selector();
        let t0 = Instant::now();
        selector.begin_press(1, 100.0, t0);
        selector.end_press(t0 + Duration::from_millis(50));
        // Second press 50px away: not a double-tap
        selector.begin_press(1, 150.0, t0 + Duration::from_millis(150));
        assert!(matches!(
            selector.gesture_state(),
            GestureState::ArmedLongPress { .. }
        ));
    }

    #[test]
    fn test_start_handle_drag_clamps_to_end() {
        let (mut selector, _) = ready_selector();
        selector.select_span(10.0); // [0, 10]
        let t0 = Instant::now();
        selector.begin_press(1, 0.0, t0);
        selector.tick(t0 + Duration::from_millis(450));
        // Force a start-handle drag directly
        selector.gesture = GestureState::Dragging {
            pointer_id: 1,
            handle: DragHandle::Start,
            offset_percent: 0.0,
        };
        // Drag way past the end bound
        selector.move_press(900.0, t0 + Duration::from_millis(500));
        let sel = selector.selection().unwrap();
        assert!(sel.start < sel.end);
        assert!((sel.end - sel.start) >= MIN_SPAN_SECONDS - 1e-9);
    }

    #[test]
    fn test_end_handle_respects_span_cap() {
        let mut selector = TimeRangeSelector::new()
            .with_track_width(1000.0)
            .with_max_gif_duration(10.0);
        selector.on_metadata_loaded(120.0, 1920, 1080);
        let t0 = Instant::now();
        selector.begin_press(1, 0.0, t0);
        selector.tick(t0 + Duration::from_millis(450));
        // Long-press anchored at 0, now drag the end far right (96s)
        selector.move_press(800.0, t0 + Duration::from_millis(500));
        let sel = selector.selection().unwrap();
        assert!(sel.span() <= 10.0 + 1e-9);
    }

    #[test]
    fn test_cancel_press_drops_gesture_without_seek() {
        let (mut selector, _) = ready_selector();
        let t0 = Instant::now();
        selector.begin_press(1, 700.0, t0);
        selector.cancel_press();
        assert!(selector.gesture_state().is_idle());
        assert_eq!(selector.playhead(), 0.0);
        // Deadline elapses after cancel: nothing fires
        selector.tick(t0 + Duration::from_secs(1));
        assert!(selector.gesture_state().is_idle());
    }

    #[test]
    fn test_viewport_changes_do_not_fire_selection_callback() {
        let (mut selector, listener) = ready_selector();
        let committed = listener.selections().len();
        selector.zoom_in(0.5);
        selector.pan(PanDirection::Right);
        selector.zoom_out();
        selector.focus_on_selection();
        assert_eq!(listener.selections().len(), committed);
    }

    #[test]
    fn test_zoom_round_trip_restores_viewport() {
        let (mut selector, _) = ready_selector();
        selector.zoom_in(0.3);
        let zoomed = selector.viewport();
        selector.zoom_in(0.3);
        selector.zoom_out_at(0.3);
        let restored = selector.viewport();
        assert!((restored.view_start - zoomed.view_start).abs() < 1e-6);
        assert!((restored.view_end - zoomed.view_end).abs() < 1e-6);
    }

    #[test]
    fn test_focus_on_selection_contains_it() {
        let (mut selector, _) = ready_selector();
        selector.select_span(3.0);
        // Move selection to [10, 13] via direct commit path
        selector.gesture = GestureState::Dragging {
            pointer_id: 1,
            handle: DragHandle::Whole,
            offset_percent: 0.0,
        };
        let t0 = Instant::now();
        selector.move_press(83.33, t0); // ~10s at full viewport
        selector.end_press(t0);

        let sel = selector.selection().unwrap();
        selector.focus_on_selection();
        let vp = selector.viewport();
        assert!(vp.view_start * 120.0 <= sel.start + 1e-6);
        assert!(vp.view_end * 120.0 >= sel.end - 1e-6);
    }

    #[test]
    fn test_source_replacement_resets_state() {
        let (mut selector, listener) = ready_selector();
        selector.select_span(10.0);
        selector.zoom_in(0.5);
        selector.on_metadata_loaded(60.0, 640, 480);

        let sel = selector.selection().unwrap();
        assert_eq!((sel.start, sel.end), (0.0, 3.0));
        assert_eq!(selector.viewport(), ViewportWindow::full());
        assert_eq!(selector.playhead(), 0.0);
        assert_eq!(listener.metadata().len(), 2);
    }

    #[test]
    fn test_short_video_caps_initial_selection() {
        let mut selector = TimeRangeSelector::new();
        selector.on_metadata_loaded(2.0, 320, 240);
        let sel = selector.selection().unwrap();
        assert_eq!(sel.start, 0.0);
        assert_eq!(sel.end, 2.0);
    }
}
