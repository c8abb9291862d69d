use outfitvote_core::config::VotingConfig;
use outfitvote_core::models::{Day, ImageRef, Outfit, VoteDirection};
use outfitvote_voting::{VoteSession, VoteState};
use proptest::prelude::*;

fn arb_direction() -> impl Strategy<Value = VoteDirection> {
    prop_oneof![Just(VoteDirection::Up), Just(VoteDirection::Down)]
}

fn outfits(n: usize) -> Vec<Outfit> {
    (0..n)
        .map(|i| Outfit::new(format!("O{i}"), Day::ALL[i % 7], ImageRef::url("x.jpg")))
        .collect()
}

// ── Cursor strictly increases and never leaves bounds ────────────────────

proptest! {
    #[test]
    fn cursor_is_monotonic_and_bounded(
        len in 1usize..12,
        directions in prop::collection::vec(arb_direction(), 0..30),
    ) {
        let mut session = VoteSession::new(outfits(len), VotingConfig::default()).unwrap();

        for direction in directions {
            let before = session.state();
            let result = session.cast_vote(direction);

            match before {
                VoteState::Voting { cursor } => {
                    prop_assert!(result.is_ok());
                    prop_assert!(cursor < len);
                    match session.state() {
                        VoteState::Voting { cursor: next } => {
                            prop_assert_eq!(next, cursor + 1);
                            prop_assert!(next <= len - 1);
                        }
                        VoteState::Complete => prop_assert_eq!(cursor, len - 1),
                    }
                }
                VoteState::Complete => {
                    prop_assert!(result.is_err());
                    prop_assert_eq!(session.state(), VoteState::Complete);
                }
            }
        }
    }
}

// ── Each vote moves the tally by exactly one ─────────────────────────────

proptest! {
    #[test]
    fn tally_matches_directions(directions in prop::collection::vec(arb_direction(), 1..12)) {
        let len = directions.len();
        let mut session = VoteSession::new(outfits(len), VotingConfig::default()).unwrap();

        for direction in &directions {
            session.cast_vote(*direction).unwrap();
        }

        prop_assert!(session.is_complete());
        for (outfit, direction) in session.outfits().iter().zip(&directions) {
            prop_assert_eq!(outfit.votes, direction.delta());
        }
        let expected: i128 = directions.iter().map(|d| i128::from(d.delta())).sum();
        prop_assert_eq!(session.tally(), expected);
    }
}
