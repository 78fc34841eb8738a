//! Session progression integration tests.
//!
//! Retry, advance, completion and reset across both engines.

use card_arith::levels::{FactorGenerator, FractionGenerator, LevelGenerator};
use card_arith::rules::Status;
use card_arith::session::{CampaignStatus, GameSession, SessionConfig};
use card_arith::PuzzleError;

fn fraction_session(max_level: u32) -> GameSession<FractionGenerator> {
    GameSession::new(
        FractionGenerator::new(),
        SessionConfig::new().with_seed(7).with_max_level(max_level),
    )
    .unwrap()
}

/// Play the current puzzle's solution until the attempt ends.
fn win<G: LevelGenerator>(session: &mut GameSession<G>) -> Status {
    let ids: Vec<_> = session
        .puzzle()
        .solution()
        .steps()
        .iter()
        .map(|c| c.id())
        .collect();
    let mut status = session.puzzle().status();
    for id in ids {
        let index = session
            .puzzle()
            .hand()
            .iter()
            .position(|c| c.id() == id)
            .unwrap();
        status = session.apply(index).unwrap();
        if status.is_terminal() {
            break;
        }
    }
    status
}

// =============================================================================
// Progression
// =============================================================================

/// Win every level in turn until the campaign completes.
#[test]
fn test_full_campaign() {
    let mut session = fraction_session(10);

    for level in 1..=10 {
        assert_eq!(session.level(), level);
        assert_eq!(win(&mut session), Status::Won);
        let campaign = session.next_level().unwrap();
        if level < 10 {
            assert_eq!(campaign, CampaignStatus::Playing);
        } else {
            assert_eq!(campaign, CampaignStatus::Completed);
        }
    }

    assert_eq!(session.levels_won(), 10);
    assert_eq!(session.level(), 10);
    assert!((session.progress() - 1.0).abs() < 1e-9);
}

/// Retry keeps the level and deals a fresh attempt.
#[test]
fn test_retry_after_loss() {
    let mut session = GameSession::new(
        FactorGenerator::new(),
        SessionConfig::new().with_seed(3),
    )
    .unwrap();

    while !session.puzzle().status().is_terminal() {
        let last = session.puzzle().hand().len() - 1;
        session.apply(last).unwrap();
    }

    session.retry().unwrap();

    assert_eq!(session.level(), 1);
    assert_eq!(session.puzzle().status(), Status::InProgress);
    assert!(session.puzzle().history().is_empty());
    assert_eq!(session.view().message, "Level 1: Warm-up: doubling and tripling");
}

/// Advancing does not require a win.
#[test]
fn test_next_level_without_win() {
    let mut session = fraction_session(4);

    session.next_level().unwrap();
    session.next_level().unwrap();

    assert_eq!(session.level(), 3);
    assert_eq!(session.levels_won(), 0);
    assert!((session.progress() - 0.75).abs() < 1e-9);
}

/// Completed campaigns can still retry the last level and be reset.
#[test]
fn test_completed_campaign_retry_and_reset() {
    let mut session = fraction_session(1);
    assert_eq!(session.next_level().unwrap(), CampaignStatus::Completed);

    session.retry().unwrap();
    assert_eq!(session.campaign(), CampaignStatus::Completed);
    assert_eq!(session.level(), 1);

    session.reset().unwrap();
    assert_eq!(session.campaign(), CampaignStatus::Playing);
    assert_eq!(session.level(), 1);
}

/// Rejected actions surface as errors and leave the session alone.
#[test]
fn test_rejected_actions() {
    let mut session = fraction_session(3);

    assert_eq!(session.undo().unwrap_err(), PuzzleError::EmptyHistoryUndo);
    let size = session.puzzle().hand().len();
    assert_eq!(
        session.apply(size).unwrap_err(),
        PuzzleError::InvalidCardIndex { index: size, hand_size: size }
    );
    assert_eq!(session.puzzle().hand().len(), size);
}

/// Same seed, same sequence of puzzles.
#[test]
fn test_seeded_sessions_replay() {
    let mut a = fraction_session(5);
    let mut b = fraction_session(5);

    for _ in 0..4 {
        assert_eq!(a.puzzle().hand(), b.puzzle().hand());
        assert_eq!(a.puzzle().target(), b.puzzle().target());
        a.next_level().unwrap();
        b.next_level().unwrap();
    }
}

/// Views serialize for a front end.
#[test]
fn test_view_json() {
    let mut session = GameSession::new(
        FactorGenerator::new(),
        SessionConfig::new().with_seed(11),
    )
    .unwrap();
    session.apply(0).unwrap();

    let json = serde_json::to_value(session.view()).unwrap();

    assert_eq!(json["level"], 1);
    assert_eq!(json["history"].as_array().unwrap().len(), 1);
    assert!(json["message"].is_string());
}
