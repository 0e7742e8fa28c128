//! Per-match mutual exclusion for read-modify-write of one throw.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::domain::state::MatchId;

/// One async mutex per match id; different matches never contend.
#[derive(Debug, Default)]
pub struct MatchLocks {
    locks: DashMap<MatchId, Arc<Mutex<()>>>,
}

impl MatchLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access to `match_id`. Held until the guard drops.
    pub async fn acquire(&self, match_id: MatchId) -> OwnedMutexGuard<()> {
        let lock = self
            .locks
            .entry(match_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .value()
            .clone();
        lock.lock_owned().await
    }

    /// Forget the mutex of a match that will not be mutated again.
    pub fn release(&self, match_id: MatchId) {
        self.locks.remove(&match_id);
    }

    pub fn len(&self) -> usize {
        self.locks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }
}
