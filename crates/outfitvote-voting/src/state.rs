use serde::Serialize;

/// Where a vote session stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum VoteState {
    /// Waiting for a vote on `outfits[cursor]`.
    Voting { cursor: usize },
    /// Every outfit has received exactly one vote.
    Complete,
}

impl VoteState {
    pub fn is_complete(self) -> bool {
        matches!(self, VoteState::Complete)
    }

    pub fn cursor(self) -> Option<usize> {
        match self {
            VoteState::Voting { cursor } => Some(cursor),
            VoteState::Complete => None,
        }
    }

    /// The state after a vote on a session of `len` outfits.
    pub(crate) fn advance(self, len: usize) -> Self {
        match self {
            VoteState::Voting { cursor } if cursor + 1 < len => VoteState::Voting {
                cursor: cursor + 1,
            },
            _ => VoteState::Complete,
        }
    }
}

/// "Outfit `position` of `total`", 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub position: usize,
    pub total: usize,
}

impl std::fmt::Display for Progress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Outfit {} of {}", self.position, self.total)
    }
}
