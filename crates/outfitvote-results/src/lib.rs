//! # outfitvote-results
//!
//! Pure aggregation over tallied outfits. Nothing here mutates its input,
//! so results can be recomputed at any time.

pub mod rank;
pub mod summary;

pub use rank::{rank, total_votes};
pub use summary::{summarize, RankedOutfit, ResultsSummary};
