use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{ClothingId, ImageRef};

/// A clothing item in the closet. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClothingItem {
    pub id: ClothingId,
    pub name: String,
    pub image: ImageRef,
}
