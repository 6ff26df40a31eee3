// Domain models - Core types and data structures

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::errors::DomainError;

/// Minimum distance between selection bounds, in seconds. A handle can never
/// be dragged closer than this to its sibling.
pub const MIN_SPAN_SECONDS: f64 = 0.1;

/// Committed `[start, end]` time sub-range of the source, in seconds.
///
/// Invariant: `0 <= start < end`, with `end - start >= MIN_SPAN_SECONDS`.
/// Mutated by the time-range selector only; read by the transcode engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub start: f64,
    pub end: f64,
}

impl Selection {
    /// Create a new selection with validation
    pub fn new(start: f64, end: f64) -> Result<Self, DomainError> {
        if !start.is_finite() || !end.is_finite() {
            return Err(DomainError::BadArgs(
                "Selection bounds must be finite".to_string(),
            ));
        }
        if start < 0.0 {
            return Err(DomainError::InvalidTimeRange(
                "Start time cannot be negative".to_string(),
            ));
        }
        if end <= start {
            return Err(DomainError::InvalidTimeRange(format!(
                "Start ({:.3}s) must be before end ({:.3}s)",
                start, end
            )));
        }
        Ok(Self { start, end })
    }

    /// Selected span in seconds
    pub fn span(&self) -> f64 {
        self.end - self.start
    }

    /// Clamp an arbitrary requested range into a valid selection for the
    /// given media duration and span cap. The result always satisfies
    /// `0 <= start < end <= duration` and `end - start <= max_span`.
    pub fn clamped(start: f64, end: f64, duration: f64, max_span: f64) -> Self {
        let start = start.max(0.0).min(duration - MIN_SPAN_SECONDS).max(0.0);
        let end = end
            .min(duration)
            .min(start + max_span)
            .max(start + MIN_SPAN_SECONDS)
            .min(duration);
        // A degenerate duration below the minimum span collapses to the
        // full range rather than producing an inverted pair.
        if end <= start {
            return Self {
                start: 0.0,
                end: duration.max(MIN_SPAN_SECONDS),
            };
        }
        Self { start, end }
    }

    /// Validate that the selection fits inside the media duration
    pub fn validate_against_duration(&self, duration: f64) -> Result<(), DomainError> {
        if self.end > duration {
            return Err(DomainError::OutOfRange(format!(
                "Selection end ({:.3}s) exceeds media duration ({:.3}s)",
                self.end, duration
            )));
        }
        Ok(())
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.3}s, {:.3}s]", self.start, self.end)
    }
}

/// Normalized `[0,1]` sub-range of the total duration currently visible on
/// the timeline. `zoom_level` is the reciprocal of the window width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportWindow {
    pub view_start: f64,
    pub view_end: f64,
}

impl ViewportWindow {
    /// Full-range viewport (zoom level 1)
    pub fn full() -> Self {
        Self {
            view_start: 0.0,
            view_end: 1.0,
        }
    }

    /// Construct a window from normalized bounds, clamped into `[0,1]`
    pub fn from_bounds(view_start: f64, view_end: f64) -> Self {
        let view_start = view_start.clamp(0.0, 1.0 - f64::EPSILON);
        let view_end = view_end.min(1.0).max(view_start + f64::EPSILON);
        Self {
            view_start,
            view_end,
        }
    }

    /// Window width as a fraction of total duration
    pub fn width(&self) -> f64 {
        self.view_end - self.view_start
    }

    /// Effective zoom level (`1 / width`)
    pub fn zoom_level(&self) -> f64 {
        1.0 / self.width()
    }

    /// Whether the normalized position falls inside the window
    pub fn contains(&self, fraction: f64) -> bool {
        fraction >= self.view_start && fraction <= self.view_end
    }
}

impl Default for ViewportWindow {
    fn default() -> Self {
        Self::full()
    }
}

/// Intrinsic properties of a probed video source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoMetadata {
    /// Duration in seconds; NaN/infinite/<= 0 means "not yet known"
    pub duration: f64,
    pub width: u32,
    pub height: u32,
    pub frame_rate: f64,
    pub codec: String,
    pub pixel_format: Option<String>,
}

impl VideoMetadata {
    /// Whether the duration is usable. Consumers must treat an unknown
    /// duration as "metadata not yet loaded" and leave selection and
    /// viewport state untouched.
    pub fn is_known(&self) -> bool {
        duration_is_known(self.duration)
    }
}

/// Duration validity check shared by every metadata consumer
pub fn duration_is_known(duration: f64) -> bool {
    duration.is_finite() && duration > 0.0
}

/// Quality tier controlling palette size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityTier {
    Low,
    Medium,
    High,
}

impl QualityTier {
    /// Palette entries generated for this tier
    pub fn color_count(self) -> u16 {
        match self {
            QualityTier::Low => 64,
            QualityTier::Medium => 128,
            QualityTier::High => 256,
        }
    }

    /// Calibration constant for size estimation, bits per pixel per frame.
    /// Tuned against typical palettegen output, not derived from a
    /// rate-distortion model.
    pub fn bits_per_pixel(self) -> f64 {
        match self {
            QualityTier::Low => 0.60,
            QualityTier::Medium => 0.95,
            QualityTier::High => 1.30,
        }
    }

    /// Parse from a CLI string
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s.to_lowercase().as_str() {
            "low" => Ok(QualityTier::Low),
            "medium" => Ok(QualityTier::Medium),
            "high" => Ok(QualityTier::High),
            _ => Err(DomainError::BadArgs(format!(
                "Invalid quality tier: {}. Valid tiers: low, medium, high",
                s
            ))),
        }
    }
}

/// Closed set of supported output frame rates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrameRate {
    #[serde(rename = "8")]
    F8,
    #[serde(rename = "10")]
    F10,
    #[serde(rename = "12")]
    F12,
    #[serde(rename = "15")]
    F15,
}

impl FrameRate {
    pub fn as_u32(self) -> u32 {
        match self {
            FrameRate::F8 => 8,
            FrameRate::F10 => 10,
            FrameRate::F12 => 12,
            FrameRate::F15 => 15,
        }
    }

    /// Parse from a CLI value; only the enumerated rates are accepted
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "8" => Ok(FrameRate::F8),
            "10" => Ok(FrameRate::F10),
            "12" => Ok(FrameRate::F12),
            "15" => Ok(FrameRate::F15),
            _ => Err(DomainError::BadArgs(format!(
                "Invalid frame rate: {}. Valid rates: 8, 10, 12, 15",
                s
            ))),
        }
    }
}

/// Closed set of output scale presets, each mapping to a fixed maximum
/// width. `Original` keeps the source dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalePreset {
    Original,
    #[serde(rename = "720")]
    P720,
    #[serde(rename = "480")]
    P480,
    #[serde(rename = "360")]
    P360,
    #[serde(rename = "240")]
    P240,
}

impl ScalePreset {
    /// Maximum output width for this preset, if capped
    pub fn max_width(self) -> Option<u32> {
        match self {
            ScalePreset::Original => None,
            ScalePreset::P720 => Some(1280),
            ScalePreset::P480 => Some(854),
            ScalePreset::P360 => Some(640),
            ScalePreset::P240 => Some(426),
        }
    }

    /// Apply the preset to source dimensions: cap the width, preserve the
    /// aspect ratio, and round both axes to even pixels (scaler requirement).
    pub fn apply(self, width: u32, height: u32) -> (u32, u32) {
        let (w, h) = match self.max_width() {
            Some(max_w) if width > max_w => {
                let scaled_h =
                    ((height as f64 * max_w as f64 / width as f64).round() as u32).max(2);
                (max_w, scaled_h)
            }
            _ => (width, height),
        };
        (round_even(w), round_even(h))
    }

    /// Parse from a CLI string
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s.to_lowercase().as_str() {
            "original" => Ok(ScalePreset::Original),
            "720" => Ok(ScalePreset::P720),
            "480" => Ok(ScalePreset::P480),
            "360" => Ok(ScalePreset::P360),
            "240" => Ok(ScalePreset::P240),
            _ => Err(DomainError::BadArgs(format!(
                "Invalid scale preset: {}. Valid presets: original, 720, 480, 360, 240",
                s
            ))),
        }
    }
}

fn round_even(v: u32) -> u32 {
    let v = v.max(2);
    v - (v % 2)
}

/// Closed tuple of encoding knobs accepted by the transcode engine. No
/// free-form numeric input is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodingProfile {
    pub quality: QualityTier,
    pub fps: FrameRate,
    pub scale: ScalePreset,
}

impl Default for EncodingProfile {
    fn default() -> Self {
        Self {
            quality: QualityTier::High,
            fps: FrameRate::F15,
            scale: ScalePreset::Original,
        }
    }
}

/// Finished artifact produced by a transcode call. A previous result is
/// simply discarded on the next call; there is no versioning.
#[derive(Debug, Clone)]
pub struct TranscodeResult {
    pub bytes: Vec<u8>,
    pub content_type: &'static str,
    /// Output dimensions after scaling
    pub width: u32,
    pub height: u32,
    /// Number of frames written
    pub frame_count: u32,
    /// Set when the artifact still exceeds the size budget after the
    /// one-shot fallback re-encode. The budget is advisory; an oversized
    /// artifact is still a valid, returnable result.
    pub over_budget: bool,
}

impl TranscodeResult {
    /// Output size in bytes
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

#[cfg(test)]
mod tests;
