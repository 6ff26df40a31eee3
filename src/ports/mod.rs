// Ports - Interface definitions (contracts)

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::GifClipResult;

/// Descriptive metadata stored alongside an artifact
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactMetadata {
    /// Name of the source video the artifact was cut from
    pub original_name: String,
    /// Clip duration in seconds
    pub duration: f64,
    /// Output dimensions
    pub width: u32,
    pub height: u32,
    /// Declared MIME type (`image/gif`)
    pub content_type: String,
}

/// Opaque reference to a stored artifact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactRef {
    pub location: String,
}

/// Port for handing finished artifacts to the storage/repository
/// collaborator. Persistence, access control, and URL issuance are owned
/// by the implementation, not specified here.
#[async_trait]
pub trait UploadGateway: Send + Sync {
    /// Store the artifact bytes with their metadata and return a reference
    async fn store(&self, bytes: &[u8], metadata: &ArtifactMetadata) -> GifClipResult<ArtifactRef>;
}
