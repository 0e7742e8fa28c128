//! Match lifecycle: create, inspect, list and delete legs.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::ScoringConfig;
use crate::domain::exit_mode::ExitMode;
use crate::domain::state::{Match, MatchId, MatchPlayerState, PlayerId};
use crate::domain::throws::ThrowType;
use crate::error::AppError;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::matches::MatchStore;
use crate::services::match_locks::MatchLocks;
use crate::services::store_call::bounded;

/// Parameters of a new leg.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMatch {
    /// Throwing order; the first player opens.
    pub players: Vec<PlayerId>,
    pub starting_score: u32,
    pub entry_mode: ExitMode,
    pub exit_mode: ExitMode,
}

/// One dart as shown in a player's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub throw: ThrowType,
    pub ended_turn: bool,
    pub turn_number: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchView {
    #[serde(rename = "match")]
    pub game: Match,
    /// Darts per player in recording order; players without darts map to an empty list.
    pub history: BTreeMap<PlayerId, Vec<HistoryEntry>>,
}

#[derive(Clone)]
pub struct MatchService {
    store: Arc<dyn MatchStore>,
    locks: Arc<MatchLocks>,
    config: ScoringConfig,
}

impl MatchService {
    pub fn new(store: Arc<dyn MatchStore>, locks: Arc<MatchLocks>, config: ScoringConfig) -> Self {
        Self {
            store,
            locks,
            config,
        }
    }

    pub async fn create_match(&self, request: NewMatch) -> Result<Match, AppError> {
        let game = Match::new(
            Uuid::new_v4(),
            request.players,
            request.starting_score,
            request.entry_mode,
            request.exit_mode,
        )?;
        let states: Vec<MatchPlayerState> = game
            .players
            .iter()
            .map(|&p| MatchPlayerState::new(game.id, p, game.starting_score))
            .collect();

        bounded(
            self.config.store_timeout,
            "create_match",
            self.store.create_match(&game, &states),
        )
        .await?;

        info!(
            match_id = %game.id,
            players = game.players.len(),
            starting_score = game.starting_score,
            entry = ?game.entry_mode,
            exit = ?game.exit_mode,
            "Match created"
        );
        Ok(game)
    }

    /// Match with its per-player throw history. Won matches are included.
    pub async fn get_match(&self, match_id: MatchId) -> Result<MatchView, AppError> {
        debug!(%match_id, "Loading match");
        let limit = self.config.store_timeout;

        let game = bounded(limit, "load_match", self.store.load_match(match_id))
            .await?
            .ok_or_else(|| {
                DomainError::not_found(
                    NotFoundKind::UnknownMatch,
                    format!("Match {match_id} not found"),
                )
            })?;
        let throws = bounded(limit, "list_throws", self.store.list_throws(match_id)).await?;

        let mut history: BTreeMap<PlayerId, Vec<HistoryEntry>> =
            game.players.iter().map(|&p| (p, Vec::new())).collect();
        for event in throws {
            history.entry(event.player_id).or_default().push(HistoryEntry {
                throw: event.throw,
                ended_turn: event.ended_turn,
                turn_number: event.turn_number,
            });
        }

        Ok(MatchView { game, history })
    }

    pub async fn list_matches(&self) -> Result<Vec<Match>, AppError> {
        Ok(bounded(
            self.config.store_timeout,
            "list_matches",
            self.store.list_matches(),
        )
        .await?)
    }

    /// Remove a match, its player states and its throw log. Unknown ids succeed.
    pub async fn delete_match(&self, match_id: MatchId) -> Result<(), AppError> {
        let guard = self.locks.acquire(match_id).await;
        bounded(
            self.config.store_timeout,
            "delete_match",
            self.store.delete_match(match_id),
        )
        .await?;
        drop(guard);
        self.locks.release(match_id);

        info!(%match_id, "Match deleted");
        Ok(())
    }
}
