//! Shared transcoding runtime handle
//!
//! The FFmpeg runtime is initialized lazily, at most once per process, and
//! is not proven reentrant: at most one transcode may be in flight at a
//! time. Callers hold the handle behind an `Arc` and the engine serializes
//! every run through the internal mutex; concurrent calls queue rather
//! than interleave.

use std::sync::{Arc, OnceLock};

use tokio::sync::{Mutex, MutexGuard};
use tracing::info;

use crate::error::{GifClipError, GifClipResult};

/// Explicitly owned, lazily-constructed transcoding runtime
pub struct TranscodeRuntime {
    init: OnceLock<Result<(), String>>,
    serial: Mutex<()>,
}

impl TranscodeRuntime {
    /// Create an uninitialized handle; FFmpeg is loaded on first use
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            init: OnceLock::new(),
            serial: Mutex::new(()),
        })
    }

    /// Initialize FFmpeg if this is the first use. Initialization failure
    /// is fatal for the session and is returned on this and every later
    /// call.
    pub fn ensure_initialized(&self) -> GifClipResult<()> {
        let result = self.init.get_or_init(|| {
            info!("Initializing FFmpeg runtime");
            ffmpeg_next::init().map_err(|e| e.to_string())
        });
        result
            .clone()
            .map_err(|message| GifClipError::EngineInit { message })
    }

    /// Acquire exclusive access for one transcode. Waiters queue in FIFO
    /// order; the guard must be held for the whole run.
    pub(crate) async fn acquire(&self) -> MutexGuard<'_, ()> {
        self.serial.lock().await
    }
}
