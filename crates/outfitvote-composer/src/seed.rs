//! Mock outfits used when a session starts without composed outfits.

use outfitvote_core::models::{Day, ImageRef, Outfit, OutfitId};

const MOCK_OUTFITS: [(&str, Day, &str); 3] = [
    (
        "1",
        Day::Monday,
        "https://images.unsplash.com/photo-1542272604-787c3835535d?auto=format&fit=crop&q=80&w=400&h=500",
    ),
    (
        "2",
        Day::Tuesday,
        "https://images.unsplash.com/photo-1515886657613-9f3515b0c78f?auto=format&fit=crop&q=80&w=400&h=500",
    ),
    (
        "3",
        Day::Wednesday,
        "https://images.unsplash.com/photo-1533659828870-95ee305cee3e?auto=format&fit=crop&q=80&w=400&h=500",
    ),
];

/// The mock outfits, all with a zero tally.
pub fn mock_outfits(name_prefix: &str) -> Vec<Outfit> {
    MOCK_OUTFITS
        .iter()
        .map(|(id, day, url)| Outfit {
            id: OutfitId::from(*id),
            name: crate::default_outfit_name(name_prefix, *day),
            day: *day,
            image: ImageRef::url(*url),
            votes: 0,
        })
        .collect()
}
