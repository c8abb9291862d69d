//! VoteSession: one pass over the outfits, one vote each.

use outfitvote_core::config::VotingConfig;
use outfitvote_core::errors::{OutfitResult, ValidationError, WorkflowError};
use outfitvote_core::models::{Outfit, OutfitId, ShareLink, VoteDirection};
use tracing::debug;

use crate::state::{Progress, VoteState};

/// Result of a single accepted vote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteOutcome {
    pub outfit_id: OutfitId,
    pub direction: VoteDirection,
    /// The outfit's tally after the vote.
    pub votes: i64,
    /// The session state after the vote.
    pub state: VoteState,
}

/// Ordered outfits, a forward-only cursor and the completion flag.
///
/// Invariant: while `Voting { cursor }`, `cursor < outfits.len()`.
#[derive(Debug, Clone)]
pub struct VoteSession {
    outfits: Vec<Outfit>,
    state: VoteState,
    votes_cast: usize,
    share_link: Option<ShareLink>,
    config: VotingConfig,
}

impl VoteSession {
    /// Start a session at the first outfit. Fails with `NoOutfits` when
    /// there is nothing to vote on.
    pub fn new(outfits: Vec<Outfit>, config: VotingConfig) -> OutfitResult<Self> {
        if outfits.is_empty() {
            return Err(ValidationError::NoOutfits.into());
        }
        Ok(Self {
            outfits,
            state: VoteState::Voting { cursor: 0 },
            votes_cast: 0,
            share_link: None,
            config,
        })
    }

    /// Vote on the current outfit and move on.
    ///
    /// Changes the current outfit's tally by exactly one, then either
    /// advances the cursor or, on the last outfit, completes the session
    /// and generates its share link. Fails with `SessionComplete` once
    /// complete, and with `TallyOverflow` if the tally is already at the
    /// edge of its range; neither failure changes the session.
    pub fn cast_vote(&mut self, direction: VoteDirection) -> OutfitResult<VoteOutcome> {
        let cursor = self.state.cursor().ok_or(WorkflowError::SessionComplete)?;

        let outfit = &mut self.outfits[cursor];
        let votes = outfit.apply_vote(direction)?;
        let outcome_id = outfit.id.clone();

        self.votes_cast += 1;
        self.state = self.state.advance(self.outfits.len());

        if self.state.is_complete() {
            self.share_link = Some(ShareLink::generate(
                &self.config.share_base_url,
                self.config.share_token_len,
            ));
        }

        debug!(
            outfit_id = %outcome_id,
            direction = %direction,
            votes,
            complete = self.state.is_complete(),
            "vote applied"
        );

        Ok(VoteOutcome {
            outfit_id: outcome_id,
            direction,
            votes,
            state: self.state,
        })
    }

    pub fn state(&self) -> VoteState {
        self.state
    }

    pub fn is_complete(&self) -> bool {
        self.state.is_complete()
    }

    pub fn cursor(&self) -> Option<usize> {
        self.state.cursor()
    }

    /// The outfit awaiting a vote, if any.
    pub fn current(&self) -> Option<&Outfit> {
        self.cursor().map(|c| &self.outfits[c])
    }

    pub fn progress(&self) -> Option<Progress> {
        self.cursor().map(|c| Progress {
            position: c + 1,
            total: self.outfits.len(),
        })
    }

    /// Number of votes accepted so far.
    pub fn votes_cast(&self) -> usize {
        self.votes_cast
    }

    /// Sum of all tallies, widened so it cannot overflow. May be negative.
    pub fn tally(&self) -> i128 {
        self.outfits.iter().map(|o| i128::from(o.votes)).sum()
    }

    /// Share link, available once the session is complete.
    pub fn share_link(&self) -> Option<&ShareLink> {
        self.share_link.as_ref()
    }

    pub fn outfits(&self) -> &[Outfit] {
        &self.outfits
    }

    pub fn len(&self) -> usize {
        self.outfits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outfits.is_empty()
    }

    /// Give the tallied outfits back.
    pub fn into_outfits(self) -> Vec<Outfit> {
        self.outfits
    }
}
