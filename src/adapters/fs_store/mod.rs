//! Filesystem upload adapter
//!
//! Stores artifacts in a target directory with collision-safe naming and a
//! JSON metadata sidecar. This is the CLI's store backend; network
//! gateways implement the same port elsewhere.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::info;

use crate::error::{GifClipError, GifClipResult};
use crate::ports::{ArtifactMetadata, ArtifactRef, UploadGateway};

/// Upload gateway writing into a local directory
pub struct FsUploadAdapter {
    root: PathBuf,
}

impl FsUploadAdapter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Derive the artifact filename from the source name and clip length,
    /// e.g. `vacation-2500ms.gif`.
    fn artifact_name(metadata: &ArtifactMetadata) -> String {
        let stem = Path::new(&metadata.original_name)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "clip".to_string());
        let millis = (metadata.duration * 1000.0).round() as i64;
        format!("{}-{}ms.gif", stem, millis)
    }

    /// First path under `root` based on `name` that does not exist yet
    fn unique_path(&self, name: &str) -> PathBuf {
        let candidate = self.root.join(name);
        if !candidate.exists() {
            return candidate;
        }
        let stem = Path::new(name)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "clip".to_string());
        for n in 1u32.. {
            let candidate = self.root.join(format!("{}-{}.gif", stem, n));
            if !candidate.exists() {
                return candidate;
            }
        }
        unreachable!("exhausted u32 collision suffixes")
    }
}

#[async_trait]
impl UploadGateway for FsUploadAdapter {
    async fn store(&self, bytes: &[u8], metadata: &ArtifactMetadata) -> GifClipResult<ArtifactRef> {
        tokio::fs::create_dir_all(&self.root).await?;

        let path = self.unique_path(&Self::artifact_name(metadata));
        tokio::fs::write(&path, bytes).await?;

        let sidecar = path.with_extension("json");
        let record = serde_json::json!({
            "metadata": metadata,
            "size_bytes": bytes.len(),
            "stored_at": chrono::Utc::now().to_rfc3339(),
        });
        let json =
            serde_json::to_vec_pretty(&record).map_err(|e| GifClipError::UploadError {
                message: format!("Failed to serialize metadata: {}", e),
            })?;
        tokio::fs::write(&sidecar, json).await?;

        info!("Stored {} byte artifact at {}", bytes.len(), path.display());
        Ok(ArtifactRef {
            location: path.display().to_string(),
        })
    }
}
