//! # outfitvote-core
//!
//! Foundation crate for the OutfitVote planner.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::OutfitConfig;
pub use errors::{OutfitError, OutfitResult, ValidationError, WorkflowError};
pub use models::{
    ClothingId, ClothingItem, Day, ImageBlob, ImageRef, Notification, NotificationLevel, Outfit,
    OutfitId, ShareLink, VoteDirection,
};
