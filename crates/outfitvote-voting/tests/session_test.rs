use outfitvote_core::config::VotingConfig;
use outfitvote_core::models::{Day, ImageRef, Outfit, VoteDirection};
use outfitvote_core::{OutfitError, ValidationError, WorkflowError};
use outfitvote_voting::{VoteSession, VoteState};

fn outfit(name: &str) -> Outfit {
    Outfit::new(name, Day::Monday, ImageRef::url(format!("{name}.jpg")))
}

fn session(names: &[&str]) -> VoteSession {
    let outfits = names.iter().map(|n| outfit(n)).collect();
    VoteSession::new(outfits, VotingConfig::default()).unwrap()
}

#[test]
fn single_outfit_upvote_completes_immediately() {
    let mut s = session(&["A"]);
    assert_eq!(s.state(), VoteState::Voting { cursor: 0 });

    let outcome = s.cast_vote(VoteDirection::Up).unwrap();

    assert_eq!(outcome.votes, 1);
    assert_eq!(outcome.state, VoteState::Complete);
    assert!(s.is_complete());
    assert_eq!(s.outfits()[0].votes, 1);
    assert!(s.current().is_none());
}

#[test]
fn cursor_walks_forward_one_per_vote() {
    let mut s = session(&["A", "B", "C"]);
    assert_eq!(s.progress().unwrap().to_string(), "Outfit 1 of 3");

    s.cast_vote(VoteDirection::Up).unwrap();
    assert_eq!(s.cursor(), Some(1));
    assert_eq!(s.current().unwrap().name, "B");

    s.cast_vote(VoteDirection::Down).unwrap();
    assert_eq!(s.cursor(), Some(2));

    s.cast_vote(VoteDirection::Down).unwrap();
    assert!(s.is_complete());

    let votes: Vec<i64> = s.outfits().iter().map(|o| o.votes).collect();
    assert_eq!(votes, vec![1, -1, -1]);
    assert_eq!(s.tally(), -1);
    assert_eq!(s.votes_cast(), 3);
}

#[test]
fn votes_accumulate_on_existing_tallies() {
    let mut a = outfit("A");
    a.votes = -3;
    let mut s = VoteSession::new(vec![a], VotingConfig::default()).unwrap();
    s.cast_vote(VoteDirection::Down).unwrap();
    assert_eq!(s.outfits()[0].votes, -4);
}

#[test]
fn voting_after_completion_fails_without_mutation() {
    let mut s = session(&["A"]);
    s.cast_vote(VoteDirection::Up).unwrap();

    let err = s.cast_vote(VoteDirection::Up).unwrap_err();

    assert!(matches!(
        err,
        OutfitError::Workflow(WorkflowError::SessionComplete),
    ));
    assert_eq!(s.outfits()[0].votes, 1);
    assert_eq!(s.votes_cast(), 1);
}

#[test]
fn empty_session_is_rejected() {
    let err = VoteSession::new(Vec::new(), VotingConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        OutfitError::Validation(ValidationError::NoOutfits),
    ));
}

#[test]
fn share_link_appears_on_completion() {
    let config = VotingConfig {
        share_base_url: "https://example.test/vote".to_string(),
        share_token_len: 6,
    };
    let mut s = VoteSession::new(vec![outfit("A"), outfit("B")], config).unwrap();

    s.cast_vote(VoteDirection::Up).unwrap();
    assert!(s.share_link().is_none());

    s.cast_vote(VoteDirection::Up).unwrap();
    let link = s.share_link().expect("link generated on completion");
    assert_eq!(link.token.len(), 6);
    assert!(link.url.starts_with("https://example.test/vote/"));
}

#[test]
fn into_outfits_preserves_order_and_tallies() {
    let outfits: Vec<Outfit> = test_fixtures::load_fixture("outfits/mock_outfits.json");
    let ids: Vec<_> = outfits.iter().map(|o| o.id.clone()).collect();
    let mut s = VoteSession::new(outfits, VotingConfig::default()).unwrap();

    while !s.is_complete() {
        s.cast_vote(VoteDirection::Up).unwrap();
    }

    let back = s.into_outfits();
    assert_eq!(back.iter().map(|o| o.id.clone()).collect::<Vec<_>>(), ids);
    assert!(back.iter().all(|o| o.votes == 1));
}

#[test]
fn vote_that_would_overflow_leaves_session_untouched() {
    let floor = Outfit {
        votes: i64::MIN,
        ..outfit("A")
    };
    let outfits = vec![floor, outfit("B")];
    let mut s = VoteSession::new(outfits, VotingConfig::default()).unwrap();

    let err = s.cast_vote(VoteDirection::Down).unwrap_err();

    assert!(matches!(
        err,
        OutfitError::Validation(ValidationError::TallyOverflow { .. }),
    ));
    assert_eq!(s.cursor(), Some(0));
    assert_eq!(s.votes_cast(), 0);
    assert_eq!(s.tally(), i128::from(i64::MIN));

    let outcome = s.cast_vote(VoteDirection::Up).unwrap();
    assert_eq!(outcome.votes, i64::MIN + 1);
    assert_eq!(s.cursor(), Some(1));
}
