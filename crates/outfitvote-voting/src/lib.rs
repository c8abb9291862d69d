//! # outfitvote-voting
//!
//! The vote session state machine: `Voting(cursor)` → `Complete`.
//! The cursor only moves forward, one outfit per vote; there is no skip,
//! abstain or rewind.
//!
//! ## Modules
//!
//! - `state`: `VoteState` and `Progress`
//! - `session`: `VoteSession`, owning the outfits being voted on

pub mod session;
pub mod state;

pub use session::{VoteOutcome, VoteSession};
pub use state::{Progress, VoteState};
