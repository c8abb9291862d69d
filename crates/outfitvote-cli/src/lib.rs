//! Command implementations behind the `outfitvote` binary.

pub mod commands;

use anyhow::bail;
use outfitvote_core::models::VoteDirection;

/// Parse a vote pattern such as `"+-+"` or `"udu"`. Whitespace and commas
/// are ignored.
pub fn parse_votes(pattern: &str) -> anyhow::Result<Vec<VoteDirection>> {
    pattern
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .map(|c| match c.to_ascii_lowercase() {
            '+' | 'u' => Ok(VoteDirection::Up),
            '-' | 'd' => Ok(VoteDirection::Down),
            other => bail!("invalid vote {other:?}: use + or - (u or d)"),
        })
        .collect()
}
