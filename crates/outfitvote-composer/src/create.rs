//! Outfit construction.

use outfitvote_closet::Closet;
use outfitvote_core::errors::{OutfitResult, ValidationError};
use outfitvote_core::models::{ClothingId, Day, Outfit};

/// Default name for an outfit planned on `day`, e.g. "Outfit Monday".
pub fn default_outfit_name(prefix: &str, day: Day) -> String {
    format!("{prefix} {day}")
}

/// Build an outfit from an ordered selection of closet items.
///
/// The representative image is the image of the first selected item. Fails
/// with `EmptySelection` when nothing is selected and `UnknownClothingItem`
/// when a selected ID is not in the closet. Day uniqueness is not checked.
/// A blank `name` falls back to [`default_outfit_name`].
pub fn create_outfit(
    closet: &Closet,
    day: Day,
    name: &str,
    selected: &[ClothingId],
    name_prefix: &str,
) -> OutfitResult<Outfit> {
    let first = selected.first().ok_or(ValidationError::EmptySelection)?;

    if let Some(missing) = selected.iter().find(|id| !closet.contains(id)) {
        return Err(ValidationError::UnknownClothingItem {
            id: missing.to_string(),
        }
        .into());
    }

    let image = closet
        .get(first)
        .map(|item| item.image.clone())
        .ok_or_else(|| ValidationError::UnknownClothingItem {
            id: first.to_string(),
        })?;

    let name = match name.trim() {
        "" => default_outfit_name(name_prefix, day),
        trimmed => trimmed.to_string(),
    };

    Ok(Outfit::new(name, day, image))
}
