//! GifClip Library
//!
//! Interactive time-range selection and size-budgeted GIF transcoding for
//! arbitrary source videos. The two core subsystems are the gesture-driven
//! [`selector::TimeRangeSelector`] and the two-pass, palette-quantized
//! [`engine::TranscodeEngine`], tied together by the pure
//! [`estimator::SizeEstimator`].

pub mod adapters;
pub mod cli;
pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod estimator;
pub mod ports;
pub mod probe;
pub mod selector;
pub mod utils;

// Re-export commonly used types
pub use domain::errors::DomainError;
pub use domain::model::{
    EncodingProfile, FrameRate, QualityTier, ScalePreset, Selection, TranscodeResult,
    VideoMetadata, ViewportWindow,
};
pub use domain::source::VideoSource;
pub use engine::{TranscodeEngine, TranscodeObserver, TranscodeRuntime};
pub use error::{GifClipError, GifClipResult};
pub use estimator::{SizeEstimator, SizeValidation};
pub use probe::MediaProber;
pub use selector::{SelectionListener, TimeRangeSelector};
