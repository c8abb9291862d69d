use outfitvote_closet::Closet;
use outfitvote_composer::OutfitComposer;
use outfitvote_core::models::{ClothingId, Day};
use proptest::prelude::*;

fn arb_day() -> impl Strategy<Value = Day> {
    (0usize..7).prop_map(|i| Day::ALL[i])
}

// ── Empty selection always fails and never mutates ───────────────────────

proptest! {
    #[test]
    fn empty_selection_never_mutates(day in arb_day(), name in ".{0,20}") {
        let closet = Closet::seeded(1024);
        let mut composer = OutfitComposer::seeded("Outfit");
        let before = composer.outfits().to_vec();

        prop_assert!(composer.create_outfit(&closet, day, &name, &[]).is_err());
        prop_assert_eq!(composer.outfits(), before.as_slice());
    }
}

// ── Representative image is the first pick ───────────────────────────────

proptest! {
    #[test]
    fn first_pick_sets_the_image(
        picks in prop::collection::vec(0usize..5, 1..5),
        day in arb_day(),
    ) {
        let closet = Closet::seeded(1024);
        let mut composer = OutfitComposer::default();
        let selection: Vec<ClothingId> = picks
            .iter()
            .map(|&i| closet.items()[i].id.clone())
            .collect();

        let outfit = composer.create_outfit(&closet, day, "", &selection).unwrap();
        prop_assert_eq!(&outfit.image, &closet.items()[picks[0]].image);
        prop_assert_eq!(composer.len(), 1);
    }
}
