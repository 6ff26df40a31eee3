//! Media metadata probing
//!
//! Opens a source with the shared runtime and reports its intrinsic
//! `{duration, width, height}` triple plus stream details. A duration the
//! container cannot state (missing, non-finite, or non-positive) is
//! reported as NaN, which every consumer treats as "not yet known".

use std::path::Path;
use std::sync::Arc;

use tokio::task;
use tracing::{debug, info};

use crate::domain::model::VideoMetadata;
use crate::engine::TranscodeRuntime;
use crate::error::{GifClipError, GifClipResult};
use crate::VideoSource;

/// Async prober over the shared transcoding runtime
pub struct MediaProber {
    runtime: Arc<TranscodeRuntime>,
}

impl MediaProber {
    pub fn new(runtime: Arc<TranscodeRuntime>) -> Self {
        Self { runtime }
    }

    /// Probe the source and return its metadata. Callers hand the result
    /// to `VideoSource::set_metadata` and the selector's
    /// `on_metadata_loaded`, which fires the listener's `on_metadata`
    /// exactly once per source.
    pub async fn probe(&self, source: &VideoSource) -> GifClipResult<VideoMetadata> {
        self.runtime.ensure_initialized()?;
        let path = source.path().to_path_buf();
        task::spawn_blocking(move || probe_blocking(&path))
            .await
            .map_err(|e| GifClipError::ProbeError {
                message: format!("Probe worker panicked: {}", e),
            })?
    }
}

fn probe_blocking(path: &Path) -> GifClipResult<VideoMetadata> {
    let input = ffmpeg_next::format::input(&path).map_err(|e| GifClipError::ProbeError {
        message: format!("Failed to open input: {}", e),
    })?;

    let stream = input
        .streams()
        .best(ffmpeg_next::media::Type::Video)
        .ok_or_else(|| GifClipError::UnsupportedSource {
            message: "No video stream found in input".to_string(),
        })?;

    let decoder = ffmpeg_next::codec::context::Context::from_parameters(stream.parameters())
        .map_err(|e| GifClipError::ProbeError {
            message: format!("Failed to read stream parameters: {}", e),
        })?
        .decoder()
        .video()
        .map_err(|e| GifClipError::UnsupportedSource {
            message: format!("Failed to open video decoder: {}", e),
        })?;

    // Container duration first, stream duration as fallback
    let mut duration = input.duration() as f64 / ffmpeg_next::ffi::AV_TIME_BASE as f64;
    if !duration.is_finite() || duration <= 0.0 {
        let stream_duration = stream.duration();
        duration = if stream_duration > 0 {
            stream_duration as f64 * f64::from(stream.time_base())
        } else {
            f64::NAN
        };
    }
    if !duration.is_finite() || duration <= 0.0 {
        debug!("Container reports no usable duration for {}", path.display());
        duration = f64::NAN;
    }

    let avg_rate = stream.avg_frame_rate();
    let frame_rate = if avg_rate.numerator() > 0 {
        f64::from(avg_rate)
    } else {
        0.0
    };

    let codec = ffmpeg_next::decoder::find(stream.parameters().id())
        .map(|c| c.name().to_string())
        .unwrap_or_else(|| "unknown".to_string());

    let metadata = VideoMetadata {
        duration,
        width: decoder.width(),
        height: decoder.height(),
        frame_rate,
        codec,
        pixel_format: Some(format!("{:?}", decoder.format()).to_lowercase()),
    };

    info!(
        "Probed {}: {:.3}s {}x{} @ {:.2} fps ({})",
        path.display(),
        metadata.duration,
        metadata.width,
        metadata.height,
        metadata.frame_rate,
        metadata.codec,
    );
    Ok(metadata)
}
