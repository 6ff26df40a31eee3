//! Error handling module for GifClip

use thiserror::Error;

/// Main error type for GifClip operations
#[derive(Error, Debug)]
pub enum GifClipError {
    /// Input file not found or inaccessible
    #[error("Input file not found: {path}")]
    InputFileNotFound { path: String },

    /// Invalid time format
    #[error("Invalid time format: {time}. Expected HH:MM:SS.ms, MM:SS.ms, or seconds")]
    InvalidTimeFormat { time: String },

    /// Zero or negative effective duration after clamping
    #[error("Invalid time range: start ({start:.3}s) must be less than end ({end:.3}s)")]
    InvalidRange { start: f64, end: f64 },

    /// Transcoding runtime failed to initialize (fatal for the session)
    #[error("Failed to initialize transcoding runtime: {message}")]
    EngineInit { message: String },

    /// Source format/codec rejected by the runtime (fatal for that input)
    #[error("Unsupported source: {message}")]
    UnsupportedSource { message: String },

    /// Mid-encode failure; caller may retry with the same or adjusted parameters
    #[error("Transcode failed: {message}")]
    TranscodeFailure { message: String },

    /// Metadata probe error
    #[error("Failed to probe media file: {message}")]
    ProbeError { message: String },

    /// Upload gateway error
    #[error("Failed to store artifact: {message}")]
    UploadError { message: String },

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// FFmpeg error
    #[error("FFmpeg error: {0}")]
    FFmpegError(#[from] ffmpeg_next::Error),

    /// GIF container error
    #[error("GIF encoding error: {0}")]
    GifError(#[from] gif::EncodingError),
}

/// Result type alias for GifClip operations
pub type GifClipResult<T> = std::result::Result<T, GifClipError>;
