//! Constrained GIF transcoding engine
//!
//! Turns a selection and an encoding profile into a size-budgeted
//! `image/gif` artifact via a two-pass palette-quantized encode with a
//! single automatic lossy fallback.

pub mod encoder;
pub mod frames;
pub mod palette;
pub mod progress;
pub mod runtime;
pub mod transcode;

pub use progress::{NoOpObserver, TranscodeObserver};
pub use runtime::TranscodeRuntime;
pub use transcode::{
    effective_duration, TranscodeEngine, FALLBACK_COLOR_COUNT, FALLBACK_FPS,
    HARD_MAX_DURATION_SECONDS,
};
