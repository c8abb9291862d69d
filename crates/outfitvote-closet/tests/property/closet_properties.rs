use outfitvote_closet::Closet;
use outfitvote_core::models::ImageBlob;
use proptest::prelude::*;

fn photo() -> Option<ImageBlob> {
    Some(ImageBlob::new("photo.png", "image/png", vec![1, 2, 3]))
}

// ── Blank names never mutate the closet ──────────────────────────────────

proptest! {
    #[test]
    fn blank_names_are_rejected(name in "[ \t\n]{0,8}", seeded in any::<bool>()) {
        let mut closet = if seeded { Closet::seeded(1024) } else { Closet::default() };
        let before = closet.items().to_vec();

        prop_assert!(closet.add_clothing_item(&name, photo()).is_err());
        prop_assert_eq!(closet.items(), before.as_slice());
    }
}

// ── Valid uploads grow the closet by exactly one ─────────────────────────

proptest! {
    #[test]
    fn valid_uploads_append_one(names in prop::collection::vec("[a-zA-Z][a-zA-Z ]{0,15}", 1..10)) {
        let mut closet = Closet::default();
        for (i, name) in names.iter().enumerate() {
            let item = closet.add_clothing_item(name, photo()).unwrap();
            prop_assert_eq!(closet.len(), i + 1);
            prop_assert_eq!(&item.name, &name.trim().to_string());
        }
    }
}
