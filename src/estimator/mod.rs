//! Output size prediction and budget validation
//!
//! Pure arithmetic over the encoding knobs; never touches the transcoding
//! runtime. The bits-per-pixel constants are calibration values tuned
//! against typical palette-quantized output and should be re-tuned when
//! the encoder build changes.

use serde::{Deserialize, Serialize};

use crate::domain::model::{EncodingProfile, ScalePreset};

/// Default output size budget in bytes (10 MiB). Advisory, not a hard
/// contract: the engine attempts to stay under it but an oversized
/// artifact is still returned.
pub const DEFAULT_SIZE_BUDGET_BYTES: u64 = 10 * 1024 * 1024;

/// Container and per-frame metadata overhead applied on top of the raw
/// pixel-rate estimate.
const OVERHEAD_FACTOR: f64 = 1.2;

/// Predicted output size for a parameter set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeEstimate {
    pub predicted_bytes: u64,
}

/// Result of comparing an actual artifact size against the budget.
/// Purely informational; never blocks the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeValidation {
    pub within_budget: bool,
    pub actual_bytes: u64,
    pub budget_bytes: u64,
}

/// Deterministic size estimator with a fixed byte budget
#[derive(Debug, Clone)]
pub struct SizeEstimator {
    budget_bytes: u64,
}

impl SizeEstimator {
    /// Create an estimator with the default budget
    pub fn new() -> Self {
        Self {
            budget_bytes: DEFAULT_SIZE_BUDGET_BYTES,
        }
    }

    /// Override the byte budget
    pub fn with_budget(mut self, budget_bytes: u64) -> Self {
        self.budget_bytes = budget_bytes;
        self
    }

    /// Configured budget in bytes
    pub fn budget_bytes(&self) -> u64 {
        self.budget_bytes
    }

    /// Predict the output size for the given source dimensions, clip
    /// duration, and encoding profile. Monotonically non-decreasing in
    /// fps, duration, and effective resolution for a fixed quality tier.
    pub fn estimate(
        &self,
        width: u32,
        height: u32,
        duration: f64,
        profile: &EncodingProfile,
    ) -> SizeEstimate {
        let predicted_bytes = estimate_bytes(
            width,
            height,
            duration,
            profile.fps.as_u32(),
            profile.quality.bits_per_pixel(),
            profile.scale,
        );
        SizeEstimate { predicted_bytes }
    }

    /// Compare an actual artifact size against the budget
    pub fn validate(&self, actual_bytes: u64) -> SizeValidation {
        SizeValidation {
            within_budget: actual_bytes <= self.budget_bytes,
            actual_bytes,
            budget_bytes: self.budget_bytes,
        }
    }
}

impl Default for SizeEstimator {
    fn default() -> Self {
        Self::new()
    }
}

fn estimate_bytes(
    width: u32,
    height: u32,
    duration: f64,
    fps: u32,
    bits_per_pixel: f64,
    scale: ScalePreset,
) -> u64 {
    let duration = duration.max(0.0);
    let (scaled_w, scaled_h) = scale.apply(width, height);
    let pixels = scaled_w as f64 * scaled_h as f64;
    let raw = pixels * bits_per_pixel * fps as f64 * duration / 8.0;
    (raw * OVERHEAD_FACTOR).ceil() as u64
}
