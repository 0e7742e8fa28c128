//! Match store contract: the persistence collaborator of the scoring service.

use async_trait::async_trait;

use crate::domain::state::{Match, MatchId, MatchPlayerState, PlayerId, ThrowEvent};
use crate::domain::throws::ThrowType;
use crate::errors::domain::DomainError;

/// Durable storage for matches, per-player counters and the throw log.
///
/// The scoring service persists a dart through `commit_throw` only; the
/// single-write methods remain for seeding, repair and other callers.
#[async_trait]
pub trait MatchStore: Send + Sync {
    /// Persist a new match together with its initial player states.
    async fn create_match(
        &self,
        game: &Match,
        players: &[MatchPlayerState],
    ) -> Result<(), DomainError>;

    /// Load a match that can still accept throws.
    ///
    /// # Returns
    /// * `Err(NotFound(Match))` - unknown id, or the match is already won
    async fn load_active_match(&self, match_id: MatchId) -> Result<Match, DomainError>;

    /// Load a match regardless of whether it is still active.
    async fn load_match(&self, match_id: MatchId) -> Result<Option<Match>, DomainError>;

    async fn list_matches(&self) -> Result<Vec<Match>, DomainError>;

    /// # Returns
    /// * `Err(NotFound(MatchPlayer))` - player is not part of the match
    async fn load_match_player_state(
        &self,
        match_id: MatchId,
        player_id: PlayerId,
    ) -> Result<MatchPlayerState, DomainError>;

    /// Append one dart to the match log. Assigns the turn number.
    async fn record_throw(
        &self,
        match_id: MatchId,
        player_id: PlayerId,
        throw: ThrowType,
        ended_turn: bool,
    ) -> Result<ThrowEvent, DomainError>;

    /// Throw log of a match in recording order.
    async fn list_throws(&self, match_id: MatchId) -> Result<Vec<ThrowEvent>, DomainError>;

    /// Compare-and-swap on `game.version`; the stored copy gets `version + 1`.
    ///
    /// # Returns
    /// * `Ok(version)` - the new stored version
    /// * `Err(Conflict(OptimisticLock))` - stored version differs
    async fn save_match(&self, game: &Match) -> Result<u32, DomainError>;

    async fn save_match_player_state(&self, state: &MatchPlayerState) -> Result<(), DomainError>;

    /// Flag the match as finished; it no longer loads as active.
    async fn mark_match_won(&self, match_id: MatchId, winner: PlayerId)
        -> Result<(), DomainError>;

    /// Persist everything one dart changes, all or nothing: the match
    /// (compare-and-swap on `game.version`), the thrower's player state, the
    /// throw log entry, and the won flag when `game.winner` is set.
    ///
    /// # Returns
    /// * `Ok(version)` - the new stored match version
    /// * `Err(Conflict(OptimisticLock))` - stored version differs; nothing written
    /// * `Err(_)` - any other failure; nothing written
    async fn commit_throw(
        &self,
        game: &Match,
        player: &MatchPlayerState,
        throw: ThrowType,
        ended_turn: bool,
    ) -> Result<u32, DomainError>;

    /// Remove a match with its player states and throws. Unknown ids are a no-op.
    async fn delete_match(&self, match_id: MatchId) -> Result<(), DomainError>;
}
