//! Application configuration
//!
//! Optional `gifclip.toml` overriding the size budget, span cap, and
//! default encoding profile. Missing file or fields fall back to defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::model::EncodingProfile;
use crate::error::{GifClipError, GifClipResult};
use crate::estimator::DEFAULT_SIZE_BUDGET_BYTES;
use crate::selector::DEFAULT_MAX_GIF_DURATION;

/// Tunable application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Advisory output size budget in bytes
    pub size_budget_bytes: u64,
    /// UI-level cap on the selected span, in seconds
    pub max_gif_duration: f64,
    /// Profile used when the caller does not specify one
    pub default_profile: EncodingProfile,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            size_budget_bytes: DEFAULT_SIZE_BUDGET_BYTES,
            max_gif_duration: DEFAULT_MAX_GIF_DURATION,
            default_profile: EncodingProfile::default(),
        }
    }
}

impl AppConfig {
    /// Load from a TOML file, or defaults when the file does not exist
    pub fn load(path: &Path) -> GifClipResult<Self> {
        if !path.exists() {
            debug!("No config at {}; using defaults", path.display());
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        toml::from_str(&raw).map_err(|e| GifClipError::IoError(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("Invalid config {}: {}", path.display(), e),
        )))
    }
}
