use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A shareable link inviting friends to vote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ShareLink {
    pub token: String,
    pub url: String,
}

impl ShareLink {
    /// Generate a link with a fresh random token of `token_len` characters
    /// (clamped to 1..=32).
    pub fn generate(base_url: &str, token_len: usize) -> Self {
        let token: String = uuid::Uuid::new_v4()
            .simple()
            .to_string()
            .chars()
            .take(token_len.clamp(1, 32))
            .collect();
        Self::with_token(base_url, token)
    }

    /// Build a link around a known token.
    pub fn with_token(base_url: &str, token: impl Into<String>) -> Self {
        let token = token.into();
        let url = format!("{}/{}", base_url.trim_end_matches('/'), token);
        Self { token, url }
    }
}

impl std::fmt::Display for ShareLink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.url)
    }
}
