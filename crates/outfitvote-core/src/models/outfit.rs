use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{Day, ImageRef, OutfitId, VoteDirection};
use crate::errors::{OutfitResult, ValidationError};

/// A named, day-tagged grouping of clothing items with a vote tally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Outfit {
    pub id: OutfitId,
    pub name: String,
    pub day: Day,
    /// Image of the first selected clothing item.
    pub image: ImageRef,
    /// Signed tally; downvotes may push it below zero.
    #[serde(default)]
    pub votes: i64,
}

impl Outfit {
    /// A fresh outfit with a zero tally.
    pub fn new(name: impl Into<String>, day: Day, image: ImageRef) -> Self {
        Self {
            id: OutfitId::new(),
            name: name.into(),
            day,
            image,
            votes: 0,
        }
    }

    /// Apply a single vote and return the new tally. No floor or ceiling
    /// short of the `i64` range; a vote past it fails with `TallyOverflow`
    /// and leaves the tally unchanged.
    pub fn apply_vote(&mut self, direction: VoteDirection) -> Result<i64, ValidationError> {
        let Some(votes) = self.votes.checked_add(direction.delta()) else {
            return Err(ValidationError::TallyOverflow {
                outfit_id: self.id.to_string(),
            });
        };
        self.votes = votes;
        Ok(votes)
    }
}

/// Parse a JSON array of outfits. A missing `votes` field counts as zero.
pub fn parse_outfits(json: &str) -> OutfitResult<Vec<Outfit>> {
    Ok(serde_json::from_str(json)?)
}
