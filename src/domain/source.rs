//! Video source handling
//!
//! A `VideoSource` owns the raw content of one video plus its intrinsic
//! metadata, which is populated asynchronously by the prober. In-memory
//! sources are spilled to a temporary file because the FFmpeg runtime
//! reads from paths.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::domain::model::VideoMetadata;
use crate::error::{GifClipError, GifClipResult};

#[derive(Debug)]
enum Backing {
    /// Caller-owned file on disk
    File(PathBuf),
    /// In-memory bytes spilled to a temp file; removed on drop
    Spilled(NamedTempFile),
}

/// One live video source per session. Replacing the source resets all
/// selector state (handled by the selector itself).
#[derive(Debug)]
pub struct VideoSource {
    backing: Backing,
    metadata: Option<VideoMetadata>,
}

impl VideoSource {
    /// Wrap an existing file on disk
    pub fn from_path(path: impl Into<PathBuf>) -> GifClipResult<Self> {
        let path = path.into();
        if !path.exists() {
            return Err(GifClipError::InputFileNotFound {
                path: path.display().to_string(),
            });
        }
        Ok(Self {
            backing: Backing::File(path),
            metadata: None,
        })
    }

    /// Take ownership of raw video bytes, spilling them to a temp file
    pub fn from_bytes(bytes: &[u8]) -> GifClipResult<Self> {
        let mut temp = NamedTempFile::new()?;
        temp.write_all(bytes)?;
        temp.flush()?;
        debug!(
            "Spilled {} source bytes to {}",
            bytes.len(),
            temp.path().display()
        );
        Ok(Self {
            backing: Backing::Spilled(temp),
            metadata: None,
        })
    }

    /// Path the transcoding runtime reads from
    pub fn path(&self) -> &Path {
        match &self.backing {
            Backing::File(p) => p,
            Backing::Spilled(t) => t.path(),
        }
    }

    /// Probed metadata, if probing has completed
    pub fn metadata(&self) -> Option<&VideoMetadata> {
        self.metadata.as_ref()
    }

    /// Record probed metadata. Called once per source by the prober.
    pub fn set_metadata(&mut self, metadata: VideoMetadata) {
        self.metadata = Some(metadata);
    }
}
