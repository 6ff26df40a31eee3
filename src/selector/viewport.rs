//! Viewport zoom/pan math and timeline coordinate mapping
//!
//! All functions are pure; the selector owns the state and feeds it
//! through these.

use crate::domain::model::{Selection, ViewportWindow};

/// Minimum zoom level (full range visible)
pub const ZOOM_MIN: f64 = 1.0;
/// Maximum zoom level
pub const ZOOM_MAX: f64 = 16.0;
/// Fraction of the current window width shifted per pan step
pub const PAN_STEP_FRACTION: f64 = 0.25;
/// Padding around a focused selection, as a fraction of the selection span
pub const FOCUS_PADDING_FRACTION: f64 = 0.2;
/// Cap on the focus padding, as a fraction of the full duration
pub const FOCUS_PADDING_MAX_FRACTION: f64 = 0.2;

/// Sentinel percent for times left of the visible window
pub const OFFSCREEN_BEFORE: f64 = -10.0;
/// Sentinel percent for times right of the visible window
pub const OFFSCREEN_AFTER: f64 = 110.0;

/// Pan direction for keyboard/button viewport shifts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanDirection {
    Left,
    Right,
}

/// Map an absolute time to a viewport-relative percent in `[0, 100]`.
/// Times outside the visible window map to off-screen sentinels rather
/// than being clamped into view, so callers can hide out-of-view markers.
pub fn time_to_percent(time: f64, duration: f64, viewport: &ViewportWindow) -> f64 {
    let fraction = (time / duration).clamp(0.0, 1.0);
    if fraction < viewport.view_start {
        return OFFSCREEN_BEFORE;
    }
    if fraction > viewport.view_end {
        return OFFSCREEN_AFTER;
    }
    (fraction - viewport.view_start) / viewport.width() * 100.0
}

/// Like [`time_to_percent`] but without the off-screen sentinels; used for
/// drag-offset arithmetic where an out-of-view anchor still needs a real
/// coordinate.
pub fn time_to_percent_unbounded(time: f64, duration: f64, viewport: &ViewportWindow) -> f64 {
    let fraction = (time / duration).clamp(0.0, 1.0);
    (fraction - viewport.view_start) / viewport.width() * 100.0
}

/// Algebraic inverse of [`time_to_percent`]; the percent argument is
/// clamped to `[0, 100]` first.
pub fn percent_to_time(percent: f64, duration: f64, viewport: &ViewportWindow) -> f64 {
    let percent = if percent.is_finite() {
        percent.clamp(0.0, 100.0)
    } else {
        0.0
    };
    let fraction = viewport.view_start + percent / 100.0 * viewport.width();
    (fraction * duration).clamp(0.0, duration)
}

/// Recompute the window for a new zoom level so the focal point's
/// absolute time keeps the same relative position in the window.
pub fn zoom_to(viewport: &ViewportWindow, zoom_level: f64, focal_normalized: f64) -> ViewportWindow {
    let zoom_level = zoom_level.clamp(ZOOM_MIN, ZOOM_MAX);
    let new_width = 1.0 / zoom_level;
    let focal = focal_normalized.clamp(0.0, 1.0);

    // Relative position of the focal point in the current window
    let relative = ((focal - viewport.view_start) / viewport.width()).clamp(0.0, 1.0);
    let new_start = focal - relative * new_width;
    clamp_window(new_start, new_width)
}

/// Shift the window by one pan step, clamped to `[0, 1]`. No-op at zoom 1.
pub fn pan(viewport: &ViewportWindow, direction: PanDirection) -> ViewportWindow {
    let width = viewport.width();
    if width >= 1.0 {
        return *viewport;
    }
    let shift = match direction {
        PanDirection::Left => -PAN_STEP_FRACTION * width,
        PanDirection::Right => PAN_STEP_FRACTION * width,
    };
    clamp_window(viewport.view_start + shift, width)
}

/// Compute a viewport containing the selection plus symmetric padding,
/// zoomed to fit. The returned window always contains `[start, end]`.
pub fn focus_on(selection: &Selection, duration: f64) -> ViewportWindow {
    let span = selection.span();
    let padding = (span * FOCUS_PADDING_FRACTION).min(duration * FOCUS_PADDING_MAX_FRACTION);

    let window_start = ((selection.start - padding) / duration).max(0.0);
    let window_end = ((selection.end + padding) / duration).min(1.0);
    let mut width = window_end - window_start;

    // Zoom stays within [ZOOM_MIN, ZOOM_MAX]; widen around the center when
    // the padded window is narrower than the max zoom allows.
    let min_width = 1.0 / ZOOM_MAX;
    if width < min_width {
        let center = (window_start + window_end) / 2.0;
        return clamp_window(center - min_width / 2.0, min_width);
    }
    if width > 1.0 {
        width = 1.0;
    }
    clamp_window(window_start, width)
}

fn clamp_window(start: f64, width: f64) -> ViewportWindow {
    let width = width.clamp(1.0 / ZOOM_MAX, 1.0);
    let start = start.clamp(0.0, 1.0 - width);
    ViewportWindow {
        view_start: start,
        view_end: start + width,
    }
}
