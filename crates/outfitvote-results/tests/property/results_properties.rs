use outfitvote_core::models::{Day, ImageRef, Outfit, OutfitId};
use outfitvote_results::{rank, total_votes};
use proptest::prelude::*;

fn arb_outfits() -> impl Strategy<Value = Vec<Outfit>> {
    prop::collection::vec(-5i64..5, 0..20).prop_map(|tallies| {
        tallies
            .into_iter()
            .enumerate()
            .map(|(i, votes)| Outfit {
                id: OutfitId::from(i.to_string()),
                name: format!("Outfit {i}"),
                day: Day::ALL[i % 7],
                image: ImageRef::url("x.jpg"),
                votes,
            })
            .collect()
    })
}

// ── rank is idempotent ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn rank_is_idempotent(outfits in arb_outfits()) {
        let once = rank(&outfits);
        prop_assert_eq!(rank(&once), once);
    }
}

// ── rank is stable and descending ────────────────────────────────────────

proptest! {
    #[test]
    fn rank_is_stable_and_descending(outfits in arb_outfits()) {
        let ranked = rank(&outfits);
        prop_assert_eq!(ranked.len(), outfits.len());

        for pair in ranked.windows(2) {
            prop_assert!(pair[0].votes >= pair[1].votes);
            if pair[0].votes == pair[1].votes {
                // IDs are original indices.
                let a: usize = pair[0].id.as_str().parse().unwrap();
                let b: usize = pair[1].id.as_str().parse().unwrap();
                prop_assert!(a < b);
            }
        }
    }
}

// ── total is the plain sum ───────────────────────────────────────────────

proptest! {
    #[test]
    fn total_is_order_independent(outfits in arb_outfits()) {
        let expected: i128 = outfits.iter().map(|o| i128::from(o.votes)).sum();
        prop_assert_eq!(total_votes(&outfits), expected);
        prop_assert_eq!(total_votes(&rank(&outfits)), expected);
    }
}
