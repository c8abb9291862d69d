use serde::{Deserialize, Serialize};

use super::defaults;

/// Vote session configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VotingConfig {
    /// Base URL that share tokens are appended to.
    pub share_base_url: String,
    /// Length of generated share tokens.
    pub share_token_len: usize,
}

impl Default for VotingConfig {
    fn default() -> Self {
        Self {
            share_base_url: defaults::DEFAULT_SHARE_BASE_URL.to_string(),
            share_token_len: defaults::DEFAULT_SHARE_TOKEN_LEN,
        }
    }
}
