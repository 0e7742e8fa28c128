//! Store wrapper that injects failures or delays into one operation.
//!
//! `commit_throw` behaves like a transaction: a fault on any write it covers
//! fails the whole commit before the inner store sees it.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use darts_backend::domain::state::{Match, MatchId, MatchPlayerState, PlayerId, ThrowEvent};
use darts_backend::errors::domain::{DomainError, InfraErrorKind};
use darts_backend::{MatchStore, MemoryMatchStore, ThrowType};
use parking_lot::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOp {
    LoadActiveMatch,
    LoadMatchPlayerState,
    RecordThrow,
    SaveMatch,
    SaveMatchPlayerState,
    MarkMatchWon,
}

#[derive(Debug, Clone, Copy)]
pub enum StoreFault {
    Fail,
    Delay(Duration),
}

pub struct FaultyStore {
    pub inner: Arc<MemoryMatchStore>,
    fault: Mutex<Option<(StoreOp, StoreFault)>>,
}

impl FaultyStore {
    pub fn new(inner: Arc<MemoryMatchStore>) -> Self {
        Self {
            inner,
            fault: Mutex::new(None),
        }
    }

    pub fn inject(&self, op: StoreOp, fault: StoreFault) {
        *self.fault.lock() = Some((op, fault));
    }

    pub fn clear(&self) {
        *self.fault.lock() = None;
    }

    async fn check(&self, op: StoreOp) -> Result<(), DomainError> {
        let fault = *self.fault.lock();
        match fault {
            Some((target, StoreFault::Fail)) if target == op => Err(DomainError::infra(
                InfraErrorKind::StoreUnavailable,
                format!("injected failure in {op:?}"),
            )),
            Some((target, StoreFault::Delay(d))) if target == op => {
                tokio::time::sleep(d).await;
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl MatchStore for FaultyStore {
    async fn create_match(
        &self,
        game: &Match,
        players: &[MatchPlayerState],
    ) -> Result<(), DomainError> {
        self.inner.create_match(game, players).await
    }

    async fn load_active_match(&self, match_id: MatchId) -> Result<Match, DomainError> {
        self.check(StoreOp::LoadActiveMatch).await?;
        self.inner.load_active_match(match_id).await
    }

    async fn load_match(&self, match_id: MatchId) -> Result<Option<Match>, DomainError> {
        self.inner.load_match(match_id).await
    }

    async fn list_matches(&self) -> Result<Vec<Match>, DomainError> {
        self.inner.list_matches().await
    }

    async fn load_match_player_state(
        &self,
        match_id: MatchId,
        player_id: PlayerId,
    ) -> Result<MatchPlayerState, DomainError> {
        self.check(StoreOp::LoadMatchPlayerState).await?;
        self.inner.load_match_player_state(match_id, player_id).await
    }

    async fn record_throw(
        &self,
        match_id: MatchId,
        player_id: PlayerId,
        throw: ThrowType,
        ended_turn: bool,
    ) -> Result<ThrowEvent, DomainError> {
        self.check(StoreOp::RecordThrow).await?;
        self.inner
            .record_throw(match_id, player_id, throw, ended_turn)
            .await
    }

    async fn list_throws(&self, match_id: MatchId) -> Result<Vec<ThrowEvent>, DomainError> {
        self.inner.list_throws(match_id).await
    }

    async fn save_match(&self, game: &Match) -> Result<u32, DomainError> {
        self.check(StoreOp::SaveMatch).await?;
        self.inner.save_match(game).await
    }

    async fn save_match_player_state(&self, state: &MatchPlayerState) -> Result<(), DomainError> {
        self.check(StoreOp::SaveMatchPlayerState).await?;
        self.inner.save_match_player_state(state).await
    }

    async fn mark_match_won(
        &self,
        match_id: MatchId,
        winner: PlayerId,
    ) -> Result<(), DomainError> {
        self.check(StoreOp::MarkMatchWon).await?;
        self.inner.mark_match_won(match_id, winner).await
    }

    async fn commit_throw(
        &self,
        game: &Match,
        player: &MatchPlayerState,
        throw: ThrowType,
        ended_turn: bool,
    ) -> Result<u32, DomainError> {
        self.check(StoreOp::SaveMatch).await?;
        self.check(StoreOp::SaveMatchPlayerState).await?;
        self.check(StoreOp::RecordThrow).await?;
        if game.winner.is_some() {
            self.check(StoreOp::MarkMatchWon).await?;
        }
        self.inner
            .commit_throw(game, player, throw, ended_turn)
            .await
    }

    async fn delete_match(&self, match_id: MatchId) -> Result<(), DomainError> {
        self.inner.delete_match(match_id).await
    }
}
