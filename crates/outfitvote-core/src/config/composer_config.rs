use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Outfit composer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComposerConfig {
    /// Simulated save latency in milliseconds.
    pub save_delay_ms: u64,
    /// Prefix of the default draft name ("Outfit Monday").
    pub default_name_prefix: String,
}

impl ComposerConfig {
    pub fn save_delay(&self) -> Duration {
        Duration::from_millis(self.save_delay_ms)
    }
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            save_delay_ms: defaults::DEFAULT_SAVE_DELAY_MS,
            default_name_prefix: defaults::DEFAULT_OUTFIT_NAME_PREFIX.to_string(),
        }
    }
}
