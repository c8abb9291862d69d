use outfitvote_core::models::Outfit;
use serde::Serialize;

use crate::rank::{rank, total_votes};

/// An outfit with its 1-based position in the ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedOutfit {
    pub position: usize,
    pub outfit: Outfit,
}

/// Everything the results view shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultsSummary {
    pub ranking: Vec<RankedOutfit>,
    pub total_votes: i128,
}

impl ResultsSummary {
    /// The favourite: the first-ranked outfit.
    pub fn top(&self) -> Option<&Outfit> {
        self.ranking.first().map(|r| &r.outfit)
    }

    pub fn is_empty(&self) -> bool {
        self.ranking.is_empty()
    }
}

/// Rank `outfits` and total their votes.
pub fn summarize(outfits: &[Outfit]) -> ResultsSummary {
    let ranking = rank(outfits)
        .into_iter()
        .enumerate()
        .map(|(i, outfit)| RankedOutfit {
            position: i + 1,
            outfit,
        })
        .collect();

    ResultsSummary {
        ranking,
        total_votes: total_votes(outfits),
    }
}
