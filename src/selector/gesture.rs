//! Gesture state machine types
//!
//! Pointer input resolves into one of three states. Transitions are driven
//! by the selector's `begin_press` / `move_press` / `end_press` /
//! `cancel_press` entry points plus the deadline poll in `tick`; there is
//! no hidden timer thread.

use std::time::{Duration, Instant};

/// Delay before a stationary press becomes a long-press selection
pub const LONG_PRESS_DELAY: Duration = Duration::from_millis(450);
/// Two presses within this window (and [`DOUBLE_TAP_SLOP_PX`]) form a
/// double-tap; the time value under the taps is irrelevant to the check.
pub const DOUBLE_TAP_WINDOW: Duration = Duration::from_millis(300);
/// Maximum pointer travel between the taps of a double-tap
pub const DOUBLE_TAP_SLOP_PX: f64 = 30.0;
/// Pointer travel that disarms a pending long-press
pub const DRAG_SLOP_PX: f64 = 12.0;
/// Span of the fresh selection a long-press starts, in seconds
pub const LONG_PRESS_SPAN_SECONDS: f64 = 1.0;

/// Which part of the selection a drag manipulates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragHandle {
    /// Left bound; clamps to `[0, end - epsilon]`
    Start,
    /// Right bound; clamps to `[start + epsilon, min(duration, start + max_span)]`
    End,
    /// Whole selection; span preserved, both ends clamped jointly
    Whole,
}

/// Tagged gesture state. Exactly one pointer may hold the gesture; a
/// second concurrent pointer-down is ignored until the first ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureState {
    Idle,
    /// Press received, long-press timer running. `deadline` is `None`
    /// once movement beyond [`DRAG_SLOP_PX`] disarms the timer; the
    /// eventual release then falls back to a plain seek.
    ArmedLongPress {
        pointer_id: u64,
        origin_x: f64,
        deadline: Option<Instant>,
    },
    /// Actively dragging a handle. `offset_percent` is the distance
    /// between the press position and the selection start at press time,
    /// used by whole-selection drags.
    Dragging {
        pointer_id: u64,
        handle: DragHandle,
        offset_percent: f64,
    },
}

impl GestureState {
    /// Pointer id currently holding the gesture, if any
    pub fn active_pointer(&self) -> Option<u64> {
        match self {
            GestureState::Idle => None,
            GestureState::ArmedLongPress { pointer_id, .. }
            | GestureState::Dragging { pointer_id, .. } => Some(*pointer_id),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, GestureState::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, GestureState::Dragging { .. })
    }
}

/// Record of the most recent completed press, for double-tap detection
#[derive(Debug, Clone, Copy)]
pub struct TapRecord {
    pub x: f64,
    pub at: Instant,
}

impl TapRecord {
    /// Whether a new press at `(x, at)` forms a double-tap with this one
    pub fn is_double_tap(&self, x: f64, at: Instant) -> bool {
        at.duration_since(self.at) <= DOUBLE_TAP_WINDOW && (x - self.x).abs() <= DOUBLE_TAP_SLOP_PX
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_pointer() {
        assert_eq!(GestureState::Idle.active_pointer(), None);
        let armed = GestureState::ArmedLongPress {
            pointer_id: 7,
            origin_x: 100.0,
            deadline: None,
        };
        assert_eq!(armed.active_pointer(), Some(7));
        let dragging = GestureState::Dragging {
            pointer_id: 3,
            handle: DragHandle::End,
            offset_percent: 0.0,
        };
        assert_eq!(dragging.active_pointer(), Some(3));
    }

    #[test]
    fn test_double_tap_by_position_and_time() {
        let now = Instant::now();
        let tap = TapRecord { x: 100.0, at: now };

        // Within window and slop
        assert!(tap.is_double_tap(110.0, now + Duration::from_millis(200)));
        // Too far apart in space
        assert!(!tap.is_double_tap(140.0, now + Duration::from_millis(200)));
        // Too late
        assert!(!tap.is_double_tap(100.0, now + Duration::from_millis(301)));
    }
}
