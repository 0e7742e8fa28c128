use uuid::Uuid;

use crate::domain::throws::ThrowType::{InnerBull, OuterBull, D10, D20, S1, S19, S20, S5, T20};
use crate::domain::turn::{apply_throw, classify_throw};
use crate::domain::{BustReason, ExitMode, Match, MatchPhase, ThrowOutcome};
use crate::errors::domain::{DomainError, ValidationKind};

fn two_player_match(start: u32, entry: ExitMode, exit: ExitMode) -> (Match, Uuid, Uuid) {
    let a = Uuid::new_v4();
    let b = Uuid::new_v4();
    let game = Match::new(Uuid::new_v4(), vec![a, b], start, entry, exit).unwrap();
    (game, a, b)
}

#[test]
fn master_in_single_is_an_illegal_entry() {
    let (mut game, a, b) = two_player_match(501, ExitMode::Master, ExitMode::Double);
    assert_eq!(game.phase(), MatchPhase::AwaitingEntry);

    let result = apply_throw(&mut game, S5).unwrap();

    assert_eq!(result.outcome, ThrowOutcome::Bust(BustReason::IllegalEntry));
    assert_eq!(result.thrower, a);
    assert_eq!(result.score_after, 501);
    assert_eq!(game.score_of(a), Some(501));
    assert_eq!(game.current_player, b);
    assert_eq!(game.darts_this_turn, 0);
}

#[test]
fn legal_entry_scores_normally() {
    let (mut game, a, _) = two_player_match(501, ExitMode::Master, ExitMode::Double);

    let result = apply_throw(&mut game, T20).unwrap();

    assert_eq!(result.outcome, ThrowOutcome::Scored { turn_complete: false });
    assert_eq!(game.score_of(a), Some(441));
    assert_eq!(game.current_player, a);
    assert_eq!(game.darts_this_turn, 1);
    assert_eq!(game.phase(), MatchPhase::InPlay);
}

#[test]
fn double_out_finish_wins() {
    let (mut game, a, _) = two_player_match(501, ExitMode::Straight, ExitMode::Double);
    game.scores.insert(a, 40);

    let result = apply_throw(&mut game, D20).unwrap();

    assert_eq!(result.outcome, ThrowOutcome::Won);
    assert!(result.outcome.ended_turn());
    assert_eq!(game.winner, Some(a));
    assert_eq!(game.score_of(a), Some(0));
    assert_eq!(game.phase(), MatchPhase::Won);
    // winner keeps the throw
    assert_eq!(game.current_player, a);
    assert_eq!(game.darts_this_turn, 1);
}

#[test]
fn single_to_zero_on_double_out_is_an_illegal_finish() {
    let (mut game, a, b) = two_player_match(501, ExitMode::Straight, ExitMode::Double);
    game.scores.insert(a, 20);
    game.darts_this_turn = 1;

    let result = apply_throw(&mut game, S20).unwrap();

    assert_eq!(result.outcome, ThrowOutcome::Bust(BustReason::IllegalFinish));
    assert_eq!(game.score_of(a), Some(20));
    assert_eq!(game.current_player, b);
    assert_eq!(game.darts_this_turn, 0);
    assert_eq!(game.winner, None);
}

#[test]
fn master_out_accepts_treble_finish() {
    let (mut game, a, _) = two_player_match(301, ExitMode::Straight, ExitMode::Master);
    game.scores.insert(a, 60);

    let result = apply_throw(&mut game, T20).unwrap();
    assert_eq!(result.outcome, ThrowOutcome::Won);
}

#[test]
fn master_out_rejects_outer_bull_finish() {
    let (mut game, a, _) = two_player_match(301, ExitMode::Straight, ExitMode::Master);
    game.scores.insert(a, 25);

    let result = apply_throw(&mut game, OuterBull).unwrap();
    assert_eq!(result.outcome, ThrowOutcome::Bust(BustReason::IllegalFinish));
}

#[test]
fn straight_out_accepts_anything_to_zero() {
    let (mut game, a, _) = two_player_match(301, ExitMode::Straight, ExitMode::Straight);
    game.scores.insert(a, 1);

    let result = apply_throw(&mut game, S1).unwrap();
    assert_eq!(result.outcome, ThrowOutcome::Won);
}

#[test]
fn overshooting_is_a_bust() {
    let (mut game, a, b) = two_player_match(301, ExitMode::Straight, ExitMode::Straight);
    game.scores.insert(a, 10);
    game.darts_this_turn = 2;

    let result = apply_throw(&mut game, T20).unwrap();

    assert_eq!(result.outcome, ThrowOutcome::Bust(BustReason::Overthrow));
    assert_eq!(game.score_of(a), Some(10));
    assert_eq!(game.current_player, b);
    assert_eq!(game.darts_this_turn, 0);
}

#[test]
fn leaving_one_is_a_bust_only_when_doubles_are_needed() {
    let (mut game, a, _) = two_player_match(301, ExitMode::Straight, ExitMode::Double);
    game.scores.insert(a, 20);
    assert_eq!(
        classify_throw(&game, S19).unwrap(),
        ThrowOutcome::Bust(BustReason::Overthrow)
    );

    game.exit_mode = ExitMode::Master;
    assert_eq!(
        classify_throw(&game, S19).unwrap(),
        ThrowOutcome::Bust(BustReason::Overthrow)
    );

    game.exit_mode = ExitMode::Straight;
    assert_eq!(
        classify_throw(&game, S19).unwrap(),
        ThrowOutcome::Scored { turn_complete: false }
    );
}

#[test]
fn double_in_cannot_overshoot_a_tiny_start() {
    // a double that overshoots never counts as entering
    let (mut game, a, b) = two_player_match(30, ExitMode::Double, ExitMode::Double);

    let result = apply_throw(&mut game, InnerBull).unwrap();

    assert_eq!(result.outcome, ThrowOutcome::Bust(BustReason::IllegalEntry));
    assert_eq!(game.score_of(a), Some(30));
    assert_eq!(game.current_player, b);
}

#[test]
fn legal_entry_leaving_one_still_busts_on_double_out() {
    // the entry check only opens scoring; overthrow rules still apply
    let (mut game, a, b) = two_player_match(41, ExitMode::Straight, ExitMode::Double);

    let result = apply_throw(&mut game, D20).unwrap();

    assert_eq!(result.outcome, ThrowOutcome::Bust(BustReason::Overthrow));
    assert_eq!(game.score_of(a), Some(41));
    assert_eq!(game.current_player, b);
    assert_eq!(game.phase(), MatchPhase::AwaitingEntry);
}

#[test]
fn double_in_straight_to_finish() {
    let (mut game, a, _) = two_player_match(40, ExitMode::Double, ExitMode::Double);

    let result = apply_throw(&mut game, D20).unwrap();

    assert_eq!(result.outcome, ThrowOutcome::Won);
    assert_eq!(game.winner, Some(a));
}

#[test]
fn third_dart_rotates_to_next_player() {
    let (mut game, a, b) = two_player_match(501, ExitMode::Straight, ExitMode::Double);

    assert_eq!(
        apply_throw(&mut game, T20).unwrap().outcome,
        ThrowOutcome::Scored { turn_complete: false }
    );
    assert_eq!(
        apply_throw(&mut game, T20).unwrap().outcome,
        ThrowOutcome::Scored { turn_complete: false }
    );
    let third = apply_throw(&mut game, T20).unwrap();

    assert_eq!(third.outcome, ThrowOutcome::Scored { turn_complete: true });
    assert!(third.outcome.ended_turn());
    assert_eq!(third.score_after, 321);
    assert_eq!(game.score_of(a), Some(321));
    assert_eq!(game.current_player, b);
    assert_eq!(game.darts_this_turn, 0);
}

#[test]
fn rotation_wraps_to_first_player() {
    let (mut game, a, b) = two_player_match(501, ExitMode::Straight, ExitMode::Double);
    game.current_player = b;

    apply_throw(&mut game, OuterBull).unwrap();
    apply_throw(&mut game, OuterBull).unwrap();
    apply_throw(&mut game, OuterBull).unwrap();

    assert_eq!(game.current_player, a);
    assert_eq!(game.score_of(b), Some(426));
}

#[test]
fn solo_match_rotates_back_to_the_same_player() {
    let a = Uuid::new_v4();
    let mut game = Match::new(Uuid::new_v4(), vec![a], 501, ExitMode::Master, ExitMode::Double)
        .unwrap();

    apply_throw(&mut game, S1).unwrap();

    assert_eq!(game.current_player, a);
    assert_eq!(game.darts_this_turn, 0);
}

#[test]
fn won_match_rejects_further_throws() {
    let (mut game, a, _) = two_player_match(501, ExitMode::Straight, ExitMode::Double);
    game.scores.insert(a, 20);
    apply_throw(&mut game, D10).unwrap();
    let before = game.clone();

    let err = apply_throw(&mut game, S1).unwrap_err();

    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::MatchAlreadyWon, _)
    ));
    assert_eq!(game, before);
}

#[test]
fn new_match_validates_inputs() {
    let a = Uuid::new_v4();
    let err = Match::new(Uuid::new_v4(), vec![], 501, ExitMode::Straight, ExitMode::Double)
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::InvalidPlayers, _)
    ));

    let err = Match::new(Uuid::new_v4(), vec![a, a], 501, ExitMode::Straight, ExitMode::Double)
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::InvalidPlayers, _)
    ));

    let err = Match::new(Uuid::new_v4(), vec![a], 1, ExitMode::Straight, ExitMode::Double)
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::InvalidStartScore, _)
    ));
}
