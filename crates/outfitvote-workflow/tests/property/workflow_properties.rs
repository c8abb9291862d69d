use std::sync::Arc;

use outfitvote_core::config::OutfitConfig;
use outfitvote_core::models::VoteDirection;
use outfitvote_workflow::{MemoryClipboard, Step, Workflow};
use proptest::prelude::*;

#[derive(Debug, Clone, Copy)]
enum Action {
    Next,
    Back,
    Vote(VoteDirection),
}

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        Just(Action::Next),
        Just(Action::Back),
        Just(Action::Vote(VoteDirection::Up)),
        Just(Action::Vote(VoteDirection::Down)),
    ]
}

fn seeded() -> Workflow {
    let config = OutfitConfig {
        seed_mock_data: true,
        ..OutfitConfig::instant()
    };
    Workflow::new(config, Arc::new(MemoryClipboard::new()))
}

fn outfit_count(wf: &Workflow) -> usize {
    wf.composer().len() + wf.session().map_or(0, |s| s.len())
}

// ── Steps move one at a time, failures change nothing ─────────────────────

proptest! {
    #[test]
    fn navigation_is_adjacent_and_failures_are_reported(
        actions in prop::collection::vec(arb_action(), 0..40),
    ) {
        let mut wf = seeded();

        for action in actions {
            let before = wf.step();
            let notices_before = wf.notifications().len();

            let result = match action {
                Action::Next => wf.go_next().map(|_| ()),
                Action::Back => wf.go_back().map(|_| ()),
                Action::Vote(direction) => wf.cast_vote(direction).map(|_| ()),
            };

            match result {
                Ok(()) => {
                    let after = wf.step();
                    prop_assert!(
                        after == before
                            || Some(after) == before.next()
                            || Some(after) == before.previous()
                    );
                }
                Err(_) => {
                    prop_assert_eq!(wf.step(), before);
                    prop_assert_eq!(wf.notifications().len(), notices_before + 1);
                    prop_assert!(wf.notifications().latest().unwrap().is_error());
                }
            }

            // Outfits are never lost between the composer and the session.
            prop_assert_eq!(outfit_count(&wf), 3);
            prop_assert_eq!(
                wf.session().is_some(),
                matches!(wf.step(), Step::Vote | Step::Results)
            );
        }
    }
}

// ── Results reflect every vote cast ──────────────────────────────────────

proptest! {
    #[test]
    fn results_total_matches_votes(
        directions in prop::collection::vec(
            prop_oneof![Just(VoteDirection::Up), Just(VoteDirection::Down)],
            1..=3,
        ),
    ) {
        let mut wf = seeded();
        wf.go_next().unwrap();
        wf.go_next().unwrap();

        let expected: i128 = directions.iter().map(|d| i128::from(d.delta())).sum();
        for direction in directions {
            wf.cast_vote(direction).unwrap();
        }

        wf.go_next().unwrap();
        let summary = wf.results().unwrap();
        prop_assert_eq!(summary.total_votes, expected);
        let votes: Vec<i64> = summary.ranking.iter().map(|r| r.outfit.votes).collect();
        prop_assert!(votes.windows(2).all(|w| w[0] >= w[1]));
    }
}
