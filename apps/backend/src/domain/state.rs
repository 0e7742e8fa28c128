use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::checkout::DARTS_PER_TURN;
use crate::domain::exit_mode::ExitMode;
use crate::domain::throws::ThrowType;
use crate::errors::domain::{DomainError, InfraErrorKind, ValidationKind};

pub type MatchId = Uuid;
pub type PlayerId = Uuid;

/// Lowest starting score that still leaves a playable leg.
pub const MIN_STARTING_SCORE: u32 = 2;

/// Where the current player stands within the leg.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchPhase {
    /// Current player has not landed a scoring dart yet.
    AwaitingEntry,
    /// Current player is between zero and the starting score.
    InPlay,
    /// Terminal: a winner is set.
    Won,
}

/// One active leg.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: MatchId,
    /// Fixed throwing order.
    pub players: Vec<PlayerId>,
    /// Remaining score per player, always within `0..=starting_score`.
    pub scores: BTreeMap<PlayerId, u32>,
    pub current_player: PlayerId,
    /// Darts already thrown in the current turn (0..=2).
    pub darts_this_turn: u8,
    pub starting_score: u32,
    pub entry_mode: ExitMode,
    pub exit_mode: ExitMode,
    pub winner: Option<PlayerId>,
    /// Optimistic lock counter, bumped by the store on every save.
    pub version: u32,
}

impl Match {
    /// Fresh leg: everybody at the starting score, first listed player up.
    pub fn new(
        id: MatchId,
        players: Vec<PlayerId>,
        starting_score: u32,
        entry_mode: ExitMode,
        exit_mode: ExitMode,
    ) -> Result<Self, DomainError> {
        let Some(&first) = players.first() else {
            return Err(DomainError::validation(
                ValidationKind::InvalidPlayers,
                "A match needs at least one player",
            ));
        };
        let unique: HashSet<_> = players.iter().collect();
        if unique.len() != players.len() {
            return Err(DomainError::validation(
                ValidationKind::InvalidPlayers,
                "A player can only be listed once per match",
            ));
        }
        if starting_score < MIN_STARTING_SCORE {
            return Err(DomainError::validation(
                ValidationKind::InvalidStartScore,
                format!("Starting score must be at least {MIN_STARTING_SCORE}, got {starting_score}"),
            ));
        }

        let scores = players.iter().map(|&p| (p, starting_score)).collect();
        Ok(Self {
            id,
            players,
            scores,
            current_player: first,
            darts_this_turn: 0,
            starting_score,
            entry_mode,
            exit_mode,
            winner: None,
            version: 0,
        })
    }

    pub fn score_of(&self, player: PlayerId) -> Option<u32> {
        self.scores.get(&player).copied()
    }

    /// Remaining score of the player whose turn it is.
    pub fn current_score(&self) -> Result<u32, DomainError> {
        self.score_of(self.current_player).ok_or_else(|| {
            DomainError::infra(
                InfraErrorKind::DataCorruption,
                format!(
                    "Match {} has no score for current player {}",
                    self.id, self.current_player
                ),
            )
        })
    }

    pub fn darts_left(&self) -> u8 {
        DARTS_PER_TURN.saturating_sub(self.darts_this_turn)
    }

    pub fn is_won(&self) -> bool {
        self.winner.is_some()
    }

    pub fn phase(&self) -> MatchPhase {
        if self.is_won() {
            return MatchPhase::Won;
        }
        match self.score_of(self.current_player) {
            Some(score) if score == self.starting_score => MatchPhase::AwaitingEntry,
            _ => MatchPhase::InPlay,
        }
    }

    /// Player after the current one in the fixed order, wrapping around.
    pub fn next_player(&self) -> PlayerId {
        self.players
            .iter()
            .position(|&p| p == self.current_player)
            .map(|idx| self.players[(idx + 1) % self.players.len()])
            .unwrap_or(self.current_player)
    }
}

/// Per (match, player) counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchPlayerState {
    pub match_id: MatchId,
    pub player_id: PlayerId,
    /// Every dart thrown in this match, busted ones included.
    pub darts_thrown: u32,
    /// Mirrors `Match::scores[player_id]`.
    pub score: u32,
}

impl MatchPlayerState {
    pub fn new(match_id: MatchId, player_id: PlayerId, starting_score: u32) -> Self {
        Self {
            match_id,
            player_id,
            darts_thrown: 0,
            score: starting_score,
        }
    }
}

/// Immutable record of one dart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThrowEvent {
    pub match_id: MatchId,
    pub player_id: PlayerId,
    pub throw: ThrowType,
    /// Bust, third dart of the turn, or the winning dart.
    pub ended_turn: bool,
    /// 1-based turn of this player within the match.
    pub turn_number: u32,
    #[serde(with = "time::serde::rfc3339")]
    pub recorded_at: OffsetDateTime,
}
