//! Mock closet used when a session starts without uploads.

use outfitvote_core::models::{ClothingId, ClothingItem, ImageRef};

const MOCK_CLOTHES: [(&str, &str, &str); 5] = [
    (
        "1",
        "White T-shirt",
        "https://images.unsplash.com/photo-1618517351616-38fb9c5210c6?auto=format&fit=crop&q=80&w=400&h=500",
    ),
    (
        "2",
        "Blue jeans",
        "https://images.unsplash.com/photo-1565084888279-aca607ecce0c?auto=format&fit=crop&q=80&w=400&h=500",
    ),
    (
        "3",
        "Black jacket",
        "https://images.unsplash.com/photo-1591047139829-d91aecb6caea?auto=format&fit=crop&q=80&w=400&h=500",
    ),
    (
        "4",
        "Striped shirt",
        "https://images.unsplash.com/photo-1585487000160-6ebcfceb0d03?auto=format&fit=crop&q=80&w=400&h=500",
    ),
    (
        "5",
        "Grey sweater",
        "https://images.unsplash.com/photo-1620799140408-edc6dcb6d633?auto=format&fit=crop&q=80&w=400&h=500",
    ),
];

/// The mock clothing items, in display order.
pub fn mock_clothes() -> Vec<ClothingItem> {
    MOCK_CLOTHES
        .iter()
        .map(|(id, name, url)| ClothingItem {
            id: ClothingId::from(*id),
            name: (*name).to_string(),
            image: ImageRef::url(*url),
        })
        .collect()
}
