//! # outfitvote-composer
//!
//! Groups closet items into named, day-tagged outfits.
//!
//! ## Modules
//!
//! - `create`: `create_outfit`, the validated outfit constructor
//! - `draft`: `OutfitDraft`, an in-progress selection for one day
//! - `composer`: `OutfitComposer`, the outfit collection plus the open draft
//! - `week_plan`: Per-day convenience view over the collection
//! - `seed`: Mock outfits a fresh session starts from

pub mod composer;
pub mod create;
pub mod draft;
pub mod seed;
pub mod week_plan;

pub use composer::OutfitComposer;
pub use create::{create_outfit, default_outfit_name};
pub use draft::OutfitDraft;
pub use week_plan::{week_plan, DayPlan};
