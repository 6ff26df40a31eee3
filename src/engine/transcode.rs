//! Two-pass, size-budgeted GIF transcode orchestration

use std::path::Path;
use std::sync::Arc;

use tokio::task;
use tracing::{info, warn};

use crate::domain::model::{EncodingProfile, ScalePreset, Selection, TranscodeResult};
use crate::engine::encoder::GifWriter;
use crate::engine::frames::for_each_sampled_frame;
use crate::engine::palette::{PaletteBuilder, MAX_PALETTE_SAMPLES};
use crate::engine::progress::{NoOpObserver, ProgressReporter, TranscodeObserver};
use crate::engine::runtime::TranscodeRuntime;
use crate::error::{GifClipError, GifClipResult};
use crate::estimator::SizeEstimator;
use crate::VideoSource;

/// Engine-level cap on the effective clip duration, enforced regardless of
/// what the selector allowed.
pub const HARD_MAX_DURATION_SECONDS: f64 = 30.0;
/// Frame rate forced by the fallback re-encode, independent of the
/// requested rate.
pub const FALLBACK_FPS: u32 = 8;
/// Minimum palette size, forced by the fallback re-encode
pub const FALLBACK_COLOR_COUNT: u16 = 32;

const GIF_MIME: &str = "image/gif";

/// Size-budgeted GIF transcode engine.
///
/// Holds a shared runtime handle; concurrent `transcode` calls queue on
/// the runtime's internal mutex and never interleave.
pub struct TranscodeEngine {
    runtime: Arc<TranscodeRuntime>,
    estimator: SizeEstimator,
}

impl TranscodeEngine {
    /// Create an engine over a shared runtime handle
    pub fn new(runtime: Arc<TranscodeRuntime>) -> Self {
        Self {
            runtime,
            estimator: SizeEstimator::new(),
        }
    }

    /// Replace the size estimator (custom budget)
    pub fn with_estimator(mut self, estimator: SizeEstimator) -> Self {
        self.estimator = estimator;
        self
    }

    /// Transcode without progress reporting
    pub async fn transcode(
        &self,
        source: &VideoSource,
        selection: Selection,
        profile: EncodingProfile,
    ) -> GifClipResult<TranscodeResult> {
        self.transcode_observed(source, selection, profile, Arc::new(NoOpObserver))
            .await
    }

    /// Transcode the selected range into a GIF, reporting progress as a
    /// non-decreasing ratio in `[0, 1]`.
    ///
    /// The effective duration is `min(end - start, HARD_MAX_DURATION_SECONDS)`;
    /// a non-positive effective duration fails fast without touching the
    /// runtime. If the artifact exceeds the size budget, exactly one more
    /// aggressive re-encode runs (fallback fps, halved dimensions, minimum
    /// colors); whatever it produces is returned, flagged `over_budget`
    /// when still oversized.
    pub async fn transcode_observed(
        &self,
        source: &VideoSource,
        selection: Selection,
        profile: EncodingProfile,
        observer: Arc<dyn TranscodeObserver>,
    ) -> GifClipResult<TranscodeResult> {
        let effective = effective_duration(&selection);
        if !effective.is_finite() || effective <= 0.0 || selection.start < 0.0 {
            return Err(GifClipError::InvalidRange {
                start: selection.start,
                end: selection.end,
            });
        }

        self.runtime.ensure_initialized()?;
        let _serial = self.runtime.acquire().await;

        info!(
            "Transcoding [{:.3}s, {:.3}s) ({:.3}s effective) quality={:?} fps={} scale={:?}",
            selection.start,
            selection.start + effective,
            effective,
            profile.quality,
            profile.fps.as_u32(),
            profile.scale,
        );

        let path = source.path().to_path_buf();
        let start = selection.start;
        let estimator = self.estimator.clone();
        let reporter = Arc::new(ProgressReporter::new(observer));
        let worker_reporter = reporter.clone();

        let outcome = task::spawn_blocking(move || {
            run_transcode(
                &path,
                start,
                effective,
                profile,
                &estimator,
                &worker_reporter,
            )
        })
        .await
        .map_err(|e| GifClipError::TranscodeFailure {
            message: format!("Transcode worker panicked: {}", e),
        })?;

        match outcome {
            Ok(result) => {
                reporter.finish();
                Ok(result)
            }
            Err(e) => {
                reporter.fail();
                Err(e)
            }
        }
    }
}

fn run_transcode(
    path: &Path,
    start: f64,
    effective: f64,
    profile: EncodingProfile,
    estimator: &SizeEstimator,
    reporter: &ProgressReporter,
) -> GifClipResult<TranscodeResult> {
    let attempt = encode_attempt(
        path,
        start,
        effective,
        profile.fps.as_u32(),
        profile.scale,
        false,
        profile.quality.color_count(),
        reporter,
        0.0,
        0.95,
    )?;

    let validation = estimator.validate(attempt.bytes.len() as u64);
    if validation.within_budget {
        return Ok(attempt.into_result(false));
    }

    // One built-in correction pass at maximum compression; its output is
    // returned as-is, oversized or not.
    warn!(
        "Artifact is {} bytes, over the {} byte budget; running the one-shot fallback re-encode",
        validation.actual_bytes, validation.budget_bytes
    );
    let fallback = encode_attempt(
        path,
        start,
        effective,
        FALLBACK_FPS,
        profile.scale,
        true,
        FALLBACK_COLOR_COUNT,
        reporter,
        0.95,
        0.99,
    )?;
    let still_over = !estimator.validate(fallback.bytes.len() as u64).within_budget;
    if still_over {
        warn!(
            "Fallback artifact is still over budget ({} bytes); returning it flagged",
            fallback.bytes.len()
        );
    }
    Ok(fallback.into_result(still_over))
}

struct EncodeAttempt {
    bytes: Vec<u8>,
    width: u32,
    height: u32,
    frame_count: u32,
}

impl EncodeAttempt {
    fn into_result(self, over_budget: bool) -> TranscodeResult {
        TranscodeResult {
            bytes: self.bytes,
            content_type: GIF_MIME,
            width: self.width,
            height: self.height,
            frame_count: self.frame_count,
            over_budget,
        }
    }
}

/// One two-pass encode: palette generation over the sampled frame stream,
/// then a second walk applying the palette with ordered dithering.
/// Progress is mapped into the `[lo, hi]` band.
#[allow(clippy::too_many_arguments)]
fn encode_attempt(
    path: &Path,
    start: f64,
    effective: f64,
    fps: u32,
    scale: ScalePreset,
    halved: bool,
    colors: u16,
    reporter: &ProgressReporter,
    lo: f64,
    hi: f64,
) -> GifClipResult<EncodeAttempt> {
    let expected_frames = (fps as f64 * effective).ceil().max(1.0);
    let mid = lo + (hi - lo) * 0.45;
    let dims = |w: u32, h: u32| output_dims(scale, halved, w, h);

    // Pass 1: global palette over the sampled frames
    let mut builder = PaletteBuilder::new();
    let mut stride: Option<usize> = None;
    let summary = for_each_sampled_frame(path, start, effective, fps, dims, |rgb, w, h| {
        let stride = *stride.get_or_insert_with(|| {
            let total_pixels = w as usize * h as usize * expected_frames as usize;
            (total_pixels / MAX_PALETTE_SAMPLES).max(1)
        });
        builder.add_frame(rgb, stride);
        reporter.report_phase(lo, mid, builder.frames() as f64 / expected_frames);
        Ok(!reporter.cancelled())
    })?;
    if reporter.cancelled() {
        return Err(cancelled_err());
    }
    let palette = builder.build(colors)?;

    // Pass 2: re-walk the same stream, map through the palette, write GIF
    let mut bytes = Vec::new();
    let frame_count;
    {
        let mut writer = GifWriter::new(
            &mut bytes,
            summary.width,
            summary.height,
            fps,
            palette.rgb(),
        )?;
        for_each_sampled_frame(path, start, effective, fps, dims, |rgb, w, _h| {
            let indices = palette.map_frame(rgb, w);
            writer.write_indexed_frame(&indices)?;
            reporter.report_phase(mid, hi, writer.frame_count() as f64 / expected_frames);
            Ok(!reporter.cancelled())
        })?;
        frame_count = writer.frame_count();
    }
    if reporter.cancelled() {
        return Err(cancelled_err());
    }

    Ok(EncodeAttempt {
        bytes,
        width: summary.width,
        height: summary.height,
        frame_count,
    })
}

/// Clip duration the engine actually encodes, capped at the engine-level
/// maximum regardless of what the UI allowed.
pub fn effective_duration(selection: &Selection) -> f64 {
    (selection.end - selection.start).min(HARD_MAX_DURATION_SECONDS)
}

fn output_dims(scale: ScalePreset, halved: bool, width: u32, height: u32) -> (u32, u32) {
    let (w, h) = scale.apply(width, height);
    if halved {
        (half_even(w), half_even(h))
    } else {
        (w, h)
    }
}

fn half_even(v: u32) -> u32 {
    ((v / 2).max(2)) & !1u32
}

fn cancelled_err() -> GifClipError {
    GifClipError::TranscodeFailure {
        message: "Transcode cancelled by caller".to_string(),
    }
}
