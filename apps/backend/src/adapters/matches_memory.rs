//! In-process implementation of the match store.

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use time::OffsetDateTime;

use crate::domain::state::{Match, MatchId, MatchPlayerState, PlayerId, ThrowEvent};
use crate::domain::throws::ThrowType;
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};
use crate::repos::matches::MatchStore;

#[derive(Debug, Clone)]
struct StoredMatch {
    game: Match,
    active: bool,
}

/// Match store backed by concurrent maps.
///
/// Every call is atomic on its own. `commit_throw` validates all of its
/// writes while holding the match entry, then applies them.
#[derive(Debug, Default)]
pub struct MemoryMatchStore {
    matches: DashMap<MatchId, StoredMatch>,
    players: DashMap<(MatchId, PlayerId), MatchPlayerState>,
    throws: DashMap<MatchId, Vec<ThrowEvent>>,
}

impl MemoryMatchStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn missing_match(match_id: MatchId) -> DomainError {
        DomainError::not_found(NotFoundKind::Match, format!("Match {match_id} not found"))
    }

    fn missing_player(match_id: MatchId, player_id: PlayerId) -> DomainError {
        DomainError::not_found(
            NotFoundKind::MatchPlayer,
            format!("Player {player_id} is not in match {match_id}"),
        )
    }

    fn check_version(stored: &Match, game: &Match) -> Result<(), DomainError> {
        if stored.version != game.version {
            return Err(DomainError::conflict(
                ConflictKind::OptimisticLock,
                format!(
                    "Match {} version mismatch: expected {}, stored {}",
                    game.id, game.version, stored.version
                ),
            ));
        }
        Ok(())
    }

    /// Append to one match's log; turn numbers count this player's ended turns.
    fn append_throw(
        log: &mut Vec<ThrowEvent>,
        match_id: MatchId,
        player_id: PlayerId,
        throw: ThrowType,
        ended_turn: bool,
    ) -> ThrowEvent {
        let turns_ended = log
            .iter()
            .filter(|e| e.player_id == player_id && e.ended_turn)
            .count();
        let event = ThrowEvent {
            match_id,
            player_id,
            throw,
            ended_turn,
            turn_number: u32::try_from(turns_ended).unwrap_or(u32::MAX).saturating_add(1),
            recorded_at: OffsetDateTime::now_utc(),
        };
        log.push(event.clone());
        event
    }
}

#[async_trait]
impl MatchStore for MemoryMatchStore {
    async fn create_match(
        &self,
        game: &Match,
        players: &[MatchPlayerState],
    ) -> Result<(), DomainError> {
        match self.matches.entry(game.id) {
            Entry::Occupied(_) => {
                return Err(DomainError::conflict(
                    ConflictKind::Other("DuplicateMatch".to_string()),
                    format!("Match {} already exists", game.id),
                ));
            }
            Entry::Vacant(slot) => {
                slot.insert(StoredMatch {
                    game: game.clone(),
                    active: game.winner.is_none(),
                });
            }
        }
        for state in players {
            self.players
                .insert((state.match_id, state.player_id), state.clone());
        }
        Ok(())
    }

    async fn load_active_match(&self, match_id: MatchId) -> Result<Match, DomainError> {
        match self.matches.get(&match_id) {
            Some(stored) if stored.active => Ok(stored.game.clone()),
            Some(_) => Err(DomainError::not_found(
                NotFoundKind::Match,
                format!("Match {match_id} is no longer active"),
            )),
            None => Err(Self::missing_match(match_id)),
        }
    }

    async fn load_match(&self, match_id: MatchId) -> Result<Option<Match>, DomainError> {
        Ok(self.matches.get(&match_id).map(|s| s.game.clone()))
    }

    async fn list_matches(&self) -> Result<Vec<Match>, DomainError> {
        let mut all: Vec<Match> = self.matches.iter().map(|s| s.game.clone()).collect();
        all.sort_by_key(|m| m.id);
        Ok(all)
    }

    async fn load_match_player_state(
        &self,
        match_id: MatchId,
        player_id: PlayerId,
    ) -> Result<MatchPlayerState, DomainError> {
        self.players
            .get(&(match_id, player_id))
            .map(|s| s.clone())
            .ok_or_else(|| Self::missing_player(match_id, player_id))
    }

    async fn record_throw(
        &self,
        match_id: MatchId,
        player_id: PlayerId,
        throw: ThrowType,
        ended_turn: bool,
    ) -> Result<ThrowEvent, DomainError> {
        if !self.matches.contains_key(&match_id) {
            return Err(Self::missing_match(match_id));
        }

        let mut log = self.throws.entry(match_id).or_default();
        Ok(Self::append_throw(
            &mut log, match_id, player_id, throw, ended_turn,
        ))
    }

    async fn list_throws(&self, match_id: MatchId) -> Result<Vec<ThrowEvent>, DomainError> {
        Ok(self
            .throws
            .get(&match_id)
            .map(|log| log.clone())
            .unwrap_or_default())
    }

    async fn save_match(&self, game: &Match) -> Result<u32, DomainError> {
        let mut stored = self
            .matches
            .get_mut(&game.id)
            .ok_or_else(|| Self::missing_match(game.id))?;
        Self::check_version(&stored.game, game)?;

        let version = game.version.wrapping_add(1);
        stored.game = Match {
            version,
            ..game.clone()
        };
        Ok(version)
    }

    async fn save_match_player_state(&self, state: &MatchPlayerState) -> Result<(), DomainError> {
        let mut slot = self
            .players
            .get_mut(&(state.match_id, state.player_id))
            .ok_or_else(|| Self::missing_player(state.match_id, state.player_id))?;
        *slot = state.clone();
        Ok(())
    }

    async fn mark_match_won(
        &self,
        match_id: MatchId,
        winner: PlayerId,
    ) -> Result<(), DomainError> {
        let mut stored = self
            .matches
            .get_mut(&match_id)
            .ok_or_else(|| Self::missing_match(match_id))?;
        stored.game.winner = Some(winner);
        stored.active = false;
        Ok(())
    }

    async fn commit_throw(
        &self,
        game: &Match,
        player: &MatchPlayerState,
        throw: ThrowType,
        ended_turn: bool,
    ) -> Result<u32, DomainError> {
        // lock order: matches, players, throws
        let mut stored = self
            .matches
            .get_mut(&game.id)
            .ok_or_else(|| Self::missing_match(game.id))?;
        Self::check_version(&stored.game, game)?;
        if player.match_id != game.id || !game.scores.contains_key(&player.player_id) {
            return Err(Self::missing_player(player.match_id, player.player_id));
        }
        let mut slot = self
            .players
            .get_mut(&(game.id, player.player_id))
            .ok_or_else(|| Self::missing_player(game.id, player.player_id))?;

        let version = game.version.wrapping_add(1);
        stored.game = Match {
            version,
            ..game.clone()
        };
        stored.active = game.winner.is_none();
        *slot = player.clone();
        let mut log = self.throws.entry(game.id).or_default();
        Self::append_throw(&mut log, game.id, player.player_id, throw, ended_turn);
        Ok(version)
    }

    async fn delete_match(&self, match_id: MatchId) -> Result<(), DomainError> {
        self.matches.remove(&match_id);
        self.players.retain(|(mid, _), _| *mid != match_id);
        self.throws.remove(&match_id);
        Ok(())
    }
}
