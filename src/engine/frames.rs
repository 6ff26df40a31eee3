//! Decoded frame sampling for the transcode passes
//!
//! Walks the source's video stream over `[start, start + duration)`,
//! resamples to the requested frame rate, and scales each kept frame to
//! RGB24 at the target dimensions. Both encode passes re-run this walk so
//! the palette pass and the encode pass see the same frame stream.

use std::path::Path;

use tracing::debug;

use crate::error::{GifClipError, GifClipResult};

/// Outcome of one frame-stream walk
#[derive(Debug, Clone, Copy)]
pub struct SampleSummary {
    /// Frames handed to the callback
    pub frames: u32,
    /// Output width after scaling
    pub width: u32,
    /// Output height after scaling
    pub height: u32,
}

/// Decode, fps-sample, and scale the video stream of `path`.
///
/// `dims` maps the decoded stream dimensions to the output dimensions
/// (scale preset, plus the fallback halving). `on_frame` receives packed
/// RGB24 rows for each sampled frame and returns `false` to stop early
/// (cancellation).
pub fn for_each_sampled_frame(
    path: &Path,
    start: f64,
    duration: f64,
    fps: u32,
    dims: impl Fn(u32, u32) -> (u32, u32),
    mut on_frame: impl FnMut(&[u8], u32, u32) -> GifClipResult<bool>,
) -> GifClipResult<SampleSummary> {
    let mut input =
        ffmpeg_next::format::input(&path).map_err(|e| GifClipError::UnsupportedSource {
            message: format!("Failed to open input: {}", e),
        })?;

    let stream = input
        .streams()
        .best(ffmpeg_next::media::Type::Video)
        .ok_or_else(|| GifClipError::UnsupportedSource {
            message: "No video stream found in input".to_string(),
        })?;
    let stream_index = stream.index();
    let time_base = f64::from(stream.time_base());
    let avg_rate = stream.avg_frame_rate();
    let frame_step = if avg_rate.numerator() > 0 {
        1.0 / f64::from(avg_rate)
    } else {
        1.0 / 30.0
    };

    let mut decoder =
        ffmpeg_next::codec::context::Context::from_parameters(stream.parameters())
            .map_err(|e| GifClipError::UnsupportedSource {
                message: format!("Failed to create decoder context: {}", e),
            })?
            .decoder()
            .video()
            .map_err(|e| GifClipError::UnsupportedSource {
                message: format!("Failed to open video decoder: {}", e),
            })?;

    if decoder.width() == 0 || decoder.height() == 0 {
        return Err(GifClipError::UnsupportedSource {
            message: "Video stream reports zero dimensions".to_string(),
        });
    }

    let (out_w, out_h) = dims(decoder.width(), decoder.height());
    let mut scaler = ffmpeg_next::software::scaling::Context::get(
        decoder.format(),
        decoder.width(),
        decoder.height(),
        ffmpeg_next::format::Pixel::RGB24,
        out_w,
        out_h,
        ffmpeg_next::software::scaling::Flags::BILINEAR,
    )
    .map_err(|e| GifClipError::TranscodeFailure {
        message: format!("Failed to create scaler: {}", e),
    })?;

    if start > 0.0 {
        let ts = (start * ffmpeg_next::ffi::AV_TIME_BASE as f64) as i64;
        input.seek(ts, ..ts).map_err(|e| GifClipError::TranscodeFailure {
            message: format!("Failed to seek to {:.3}s: {}", start, e),
        })?;
    }

    let end = start + duration;
    let sample_interval = 1.0 / fps as f64;
    let mut next_sample = start;
    let mut emitted = 0u32;
    let mut last_time = start - frame_step;
    let mut stopped = false;
    let mut decoded = ffmpeg_next::util::frame::video::Video::empty();
    let mut scaled = ffmpeg_next::util::frame::video::Video::empty();

    'demux: for (packet_stream, packet) in input.packets() {
        if packet_stream.index() != stream_index {
            continue;
        }
        decoder
            .send_packet(&packet)
            .map_err(|e| GifClipError::TranscodeFailure {
                message: format!("Failed to send packet to decoder: {}", e),
            })?;

        while decoder.receive_frame(&mut decoded).is_ok() {
            let time = decoded
                .timestamp()
                .map(|ts| ts as f64 * time_base)
                .unwrap_or(last_time + frame_step);
            last_time = time;

            if time >= end {
                stopped = true;
                break 'demux;
            }
            if time < next_sample {
                continue;
            }

            scaler
                .run(&decoded, &mut scaled)
                .map_err(|e| GifClipError::TranscodeFailure {
                    message: format!("Failed to scale frame: {}", e),
                })?;
            let packed = pack_rgb(&scaled, out_w, out_h);
            emitted += 1;
            next_sample += sample_interval;
            if !on_frame(&packed, out_w, out_h)? {
                stopped = true;
                break 'demux;
            }
        }
    }

    // Drain the decoder for tail frames unless the walk already ended
    if !stopped && decoder.send_eof().is_ok() {
        while decoder.receive_frame(&mut decoded).is_ok() {
            let time = decoded
                .timestamp()
                .map(|ts| ts as f64 * time_base)
                .unwrap_or(last_time + frame_step);
            last_time = time;
            if time >= end {
                break;
            }
            if time < next_sample {
                continue;
            }
            scaler
                .run(&decoded, &mut scaled)
                .map_err(|e| GifClipError::TranscodeFailure {
                    message: format!("Failed to scale frame: {}", e),
                })?;
            let packed = pack_rgb(&scaled, out_w, out_h);
            emitted += 1;
            next_sample += sample_interval;
            if !on_frame(&packed, out_w, out_h)? {
                break;
            }
        }
    }

    if emitted == 0 {
        return Err(GifClipError::TranscodeFailure {
            message: format!(
                "No frames decoded in range [{:.3}s, {:.3}s)",
                start, end
            ),
        });
    }

    debug!(
        "Sampled {} frames at {}x{} over [{:.3}s, {:.3}s)",
        emitted, out_w, out_h, start, end
    );
    Ok(SampleSummary {
        frames: emitted,
        width: out_w,
        height: out_h,
    })
}

/// Pack a scaled RGB24 frame into contiguous rows, dropping the stride
/// padding the scaler leaves per line.
fn pack_rgb(frame: &ffmpeg_next::util::frame::video::Video, width: u32, height: u32) -> Vec<u8> {
    let stride = frame.stride(0);
    let data = frame.data(0);
    let row_len = width as usize * 3;
    let mut out = Vec::with_capacity(row_len * height as usize);
    for y in 0..height as usize {
        let offset = y * stride;
        out.extend_from_slice(&data[offset..offset + row_len]);
    }
    out
}
