//! Data model shared by every workflow step.

mod clothing;
mod day;
mod ids;
mod image;
mod notification;
mod outfit;
mod share_link;
mod vote;

pub use clothing::ClothingItem;
pub use day::Day;
pub use ids::{ClothingId, OutfitId};
pub use image::{ImageBlob, ImageRef};
pub use notification::{Notification, NotificationLevel};
pub use outfit::{parse_outfits, Outfit};
pub use share_link::ShareLink;
pub use vote::VoteDirection;
