use outfitvote_core::models::{parse_outfits, Day, ImageRef, Outfit, ShareLink, VoteDirection};
use proptest::prelude::*;

fn arb_day() -> impl Strategy<Value = Day> {
    (0usize..7).prop_map(|i| Day::ALL[i])
}

fn with_case(c: char, upper: bool) -> char {
    if upper {
        c.to_ascii_uppercase()
    } else {
        c.to_ascii_lowercase()
    }
}

fn arb_direction() -> impl Strategy<Value = VoteDirection> {
    prop_oneof![Just(VoteDirection::Up), Just(VoteDirection::Down)]
}

// ── Share tokens are clamped hex and joined to the base URL ─────────────

proptest! {
    #[test]
    fn share_link_token_is_clamped_hex(
        base in "https://[a-z]{1,12}\\.test(/[a-z]{1,8}){0,2}/{0,2}",
        len in 0usize..64,
    ) {
        let link = ShareLink::generate(&base, len);

        prop_assert_eq!(link.token.len(), len.clamp(1, 32));
        prop_assert!(link.token.chars().all(|c| c.is_ascii_hexdigit()));
        let expected = format!("{}/{}", base.trim_end_matches('/'), link.token);
        prop_assert_eq!(link.url, expected);
    }
}

// ── Any case of a three-letter-or-longer prefix names its day ───────────

proptest! {
    #[test]
    fn day_prefixes_parse_in_any_case(
        day in arb_day(),
        cut in 3usize..10,
        upper in prop::collection::vec(any::<bool>(), 9),
    ) {
        let label = day.label();
        let prefix: String = label
            .chars()
            .take(cut.min(label.len()))
            .zip(&upper)
            .map(|(c, &up)| with_case(c, up))
            .collect();

        prop_assert_eq!(Day::parse(&prefix), Some(day));
        prop_assert_eq!(Day::parse(&format!("  {prefix} ")), Some(day));
    }
}

// ── Tallies are the exact sum of vote deltas ────────────────────────────

proptest! {
    #[test]
    fn tally_is_sum_of_deltas(
        directions in prop::collection::vec(arb_direction(), 0..50),
    ) {
        let mut outfit = Outfit::new("Look", Day::Monday, ImageRef::url("a.jpg"));

        for direction in &directions {
            let before = outfit.votes;
            let after = outfit.apply_vote(*direction).unwrap();
            prop_assert_eq!((after - before).abs(), 1);
        }

        let expected: i64 = directions.iter().map(|d| d.delta()).sum();
        prop_assert_eq!(outfit.votes, expected);
    }

    #[test]
    fn parsed_outfits_keep_their_tallies(
        votes in prop::collection::vec(any::<i64>(), 0..8),
    ) {
        let entries: Vec<String> = votes
            .iter()
            .enumerate()
            .map(|(i, v)| {
                format!(
                    r#"{{"id":"o{i}","name":"L","day":"monday","image":"x","votes":{v}}}"#
                )
            })
            .collect();
        let json = format!("[{}]", entries.join(","));

        let outfits = parse_outfits(&json).unwrap();

        let parsed: Vec<i64> = outfits.iter().map(|o| o.votes).collect();
        prop_assert_eq!(parsed, votes);
    }
}
