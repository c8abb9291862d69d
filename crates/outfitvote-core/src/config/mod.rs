//! Configuration, loaded from TOML. Every section falls back to its defaults.

mod composer_config;
pub mod defaults;
mod observability_config;
mod upload_config;
mod voting_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use composer_config::ComposerConfig;
pub use observability_config::ObservabilityConfig;
pub use upload_config::UploadConfig;
pub use voting_config::VotingConfig;

use crate::errors::{ConfigError, OutfitResult};

/// Root configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutfitConfig {
    pub upload: UploadConfig,
    pub composer: ComposerConfig,
    pub voting: VotingConfig,
    pub observability: ObservabilityConfig,
    /// Start the closet and outfit collections from the mock data set.
    pub seed_mock_data: bool,
}

impl Default for OutfitConfig {
    fn default() -> Self {
        Self {
            upload: UploadConfig::default(),
            composer: ComposerConfig::default(),
            voting: VotingConfig::default(),
            observability: ObservabilityConfig::default(),
            seed_mock_data: defaults::DEFAULT_SEED_MOCK_DATA,
        }
    }
}

impl OutfitConfig {
    /// Parse a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(input: &str) -> OutfitResult<Self> {
        toml::from_str(input).map_err(|e| {
            ConfigError::Parse {
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// Read and parse a TOML file.
    pub fn load(path: impl AsRef<Path>) -> OutfitResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml_str(&content)
    }

    /// Render the configuration back to TOML.
    pub fn to_toml_string(&self) -> OutfitResult<String> {
        toml::to_string_pretty(self).map_err(|e| {
            ConfigError::Parse {
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// A configuration with zero simulated latency and no seeded data.
    pub fn instant() -> Self {
        Self {
            upload: UploadConfig {
                delay_ms: 0,
                ..UploadConfig::default()
            },
            composer: ComposerConfig {
                save_delay_ms: 0,
                ..ComposerConfig::default()
            },
            seed_mock_data: false,
            ..Self::default()
        }
    }
}
