//! Turn/match state machine: one dart in, one transition out.
//!
//! Pure; persistence of the mutated `Match` is the service layer's job.

use serde::Serialize;

use crate::domain::checkout::DARTS_PER_TURN;
use crate::domain::state::{Match, PlayerId};
use crate::domain::throws::ThrowType;
use crate::errors::domain::{DomainError, ValidationKind};

/// Why a dart forfeited the rest of the turn.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BustReason {
    /// Opening dart did not satisfy the entry mode.
    IllegalEntry,
    /// Dart hit zero but did not satisfy the exit mode.
    IllegalFinish,
    /// Dart overshot zero or left an unfinishable one.
    Overthrow,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ThrowOutcome {
    Bust(BustReason),
    Scored { turn_complete: bool },
    Won,
}

impl ThrowOutcome {
    pub fn is_bust(self) -> bool {
        matches!(self, ThrowOutcome::Bust(_))
    }

    pub fn is_win(self) -> bool {
        matches!(self, ThrowOutcome::Won)
    }

    /// Whether this dart closes the thrower's turn.
    pub fn ended_turn(self) -> bool {
        match self {
            ThrowOutcome::Bust(_) | ThrowOutcome::Won => true,
            ThrowOutcome::Scored { turn_complete } => turn_complete,
        }
    }
}

/// Result of applying one dart.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct TurnResult {
    /// Player who threw the dart (current player before the transition).
    pub thrower: PlayerId,
    pub throw: ThrowType,
    pub outcome: ThrowOutcome,
    /// Thrower's remaining score after the dart.
    pub score_after: u32,
}

/// Decide what `throw` means for the current player without touching state.
pub fn classify_throw(game: &Match, throw: ThrowType) -> Result<ThrowOutcome, DomainError> {
    if game.is_won() {
        return Err(DomainError::validation(
            ValidationKind::MatchAlreadyWon,
            format!("Match {} is already won", game.id),
        ));
    }

    let score = game.current_score()?;

    if score == game.starting_score && !game.entry_mode.allows_entry(score, throw) {
        return Ok(ThrowOutcome::Bust(BustReason::IllegalEntry));
    }

    if score.checked_sub(throw.points()) == Some(0) {
        return Ok(if game.exit_mode.admits(throw) {
            ThrowOutcome::Won
        } else {
            ThrowOutcome::Bust(BustReason::IllegalFinish)
        });
    }

    if game.exit_mode.is_overthrow(score, throw) {
        return Ok(ThrowOutcome::Bust(BustReason::Overthrow));
    }

    let turn_complete = game.darts_this_turn + 1 >= DARTS_PER_TURN;
    Ok(ThrowOutcome::Scored { turn_complete })
}

/// Apply one dart by the current player to `game`.
///
/// On error `game` is left untouched.
pub fn apply_throw(game: &mut Match, throw: ThrowType) -> Result<TurnResult, DomainError> {
    let outcome = classify_throw(game, throw)?;
    let thrower = game.current_player;
    let score = game.current_score()?;

    let score_after = match outcome {
        ThrowOutcome::Bust(_) => {
            game.current_player = game.next_player();
            game.darts_this_turn = 0;
            score
        }
        ThrowOutcome::Scored { .. } | ThrowOutcome::Won => {
            // classification guarantees no underflow
            let remaining = score - throw.points();
            game.scores.insert(thrower, remaining);
            game.darts_this_turn = (game.darts_this_turn + 1) % DARTS_PER_TURN;
            if outcome.is_win() {
                game.winner = Some(thrower);
            } else if game.darts_this_turn == 0 {
                game.current_player = game.next_player();
            }
            remaining
        }
    };

    Ok(TurnResult {
        thrower,
        throw,
        outcome,
        score_after,
    })
}
