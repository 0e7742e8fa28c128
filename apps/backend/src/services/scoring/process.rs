use tracing::{debug, info, warn};

use super::{ScoringService, ThrowResponse};
use crate::domain::state::{MatchId, PlayerId};
use crate::domain::throws::ThrowType;
use crate::domain::turn::{apply_throw, BustReason, ThrowOutcome};
use crate::error::AppError;
use crate::errors::domain::{DomainError, InfraErrorKind, ValidationKind};
use crate::services::store_call::bounded;

impl ScoringService {
    /// Process one dart given by its wire code.
    ///
    /// Unknown codes are rejected before any store access, so they never
    /// touch match or player state.
    pub async fn process_throw(
        &self,
        match_id: MatchId,
        player_id: PlayerId,
        throw_code: u8,
    ) -> Result<ThrowResponse, AppError> {
        let throw = ThrowType::try_from(throw_code)?;
        self.submit_throw(match_id, player_id, throw).await
    }

    /// Process one dart by `player_id` in `match_id`.
    ///
    /// A bust is a successful outcome reported through the response. The
    /// whole transition is committed in one store call, so after any failure
    /// the same throw can be resubmitted.
    pub async fn submit_throw(
        &self,
        match_id: MatchId,
        player_id: PlayerId,
        throw: ThrowType,
    ) -> Result<ThrowResponse, AppError> {
        debug!(%match_id, %player_id, %throw, "Processing throw");

        let guard = self.locks.acquire(match_id).await;
        let limit = self.config.store_timeout;

        let mut game = bounded(
            limit,
            "load_active_match",
            self.store.load_active_match(match_id),
        )
        .await?;

        if game.current_player != player_id {
            return Err(DomainError::validation(
                ValidationKind::OutOfTurn,
                format!(
                    "Player {player_id} is not the current thrower of match {match_id} (current: {})",
                    game.current_player
                ),
            )
            .into());
        }

        let mut player_state = bounded(
            limit,
            "load_match_player_state",
            self.store.load_match_player_state(match_id, player_id),
        )
        .await?;

        let score = game.current_score()?;
        if player_state.score != score {
            return Err(DomainError::infra(
                InfraErrorKind::DataCorruption,
                format!(
                    "Player {player_id} score {} disagrees with match {match_id} score {score}",
                    player_state.score
                ),
            )
            .into());
        }

        let result = apply_throw(&mut game, throw)?;
        player_state.darts_thrown = player_state.darts_thrown.saturating_add(1);
        player_state.score = result.score_after;

        game.version = bounded(
            limit,
            "commit_throw",
            self.store.commit_throw(
                &game,
                &player_state,
                throw,
                result.outcome.ended_turn(),
            ),
        )
        .await?;

        match result.outcome {
            ThrowOutcome::Won => {
                info!(
                    %match_id,
                    winner = %player_id,
                    darts_thrown = player_state.darts_thrown,
                    %throw,
                    "Match won"
                );
                drop(guard);
                self.locks.release(match_id);
            }
            ThrowOutcome::Bust(reason @ (BustReason::IllegalEntry | BustReason::IllegalFinish)) => {
                warn!(%match_id, %player_id, %throw, ?reason, "Bust on illegal throw");
            }
            ThrowOutcome::Bust(reason) => {
                debug!(%match_id, %player_id, %throw, score, ?reason, "Bust");
            }
            ThrowOutcome::Scored { turn_complete } => {
                debug!(
                    %match_id,
                    %player_id,
                    %throw,
                    remaining = result.score_after,
                    turn_complete,
                    "Throw scored"
                );
            }
        }

        Ok(ThrowResponse::build(
            &game,
            &result,
            self.config.suggest_checkouts,
        ))
    }
}
