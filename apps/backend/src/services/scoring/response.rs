use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::checkout::{find_checkout, Checkout};
use crate::domain::state::{Match, PlayerId};
use crate::domain::turn::{BustReason, ThrowOutcome, TurnResult};

/// Result of one processed dart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThrowResponse {
    pub won: bool,
    /// The dart was invalid for the turn (bust); scores are unchanged.
    pub bust: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bust_reason: Option<BustReason>,
    /// Player expected to throw next (the winner once the match is won).
    pub next_player_id: PlayerId,
    pub scores: BTreeMap<PlayerId, u32>,
    /// Suggested finish for the next thrower with the darts left in their turn.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_checkout: Option<Checkout>,
}

impl ThrowResponse {
    pub(super) fn build(game: &Match, result: &TurnResult, suggest_checkouts: bool) -> Self {
        let bust_reason = match result.outcome {
            ThrowOutcome::Bust(reason) => Some(reason),
            _ => None,
        };

        let suggested_checkout = if suggest_checkouts && !game.is_won() {
            game.score_of(game.current_player)
                .filter(|&score| score > 0)
                .and_then(|score| find_checkout(score, game.darts_left(), game.exit_mode))
        } else {
            None
        };

        Self {
            won: result.outcome.is_win(),
            bust: result.outcome.is_bust(),
            bust_reason,
            next_player_id: game.current_player,
            scores: game.scores.clone(),
            suggested_checkout,
        }
    }
}
