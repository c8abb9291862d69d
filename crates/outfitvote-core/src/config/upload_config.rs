use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Closet upload configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadConfig {
    /// Simulated upload latency in milliseconds.
    pub delay_ms: u64,
    /// Largest accepted image payload in bytes.
    pub max_image_bytes: usize,
}

impl UploadConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            delay_ms: defaults::DEFAULT_UPLOAD_DELAY_MS,
            max_image_bytes: defaults::DEFAULT_MAX_IMAGE_BYTES,
        }
    }
}
