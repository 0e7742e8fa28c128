//! Throw processing: the single operation the scoring core exposes.

mod process;
mod response;

use std::sync::Arc;

use crate::config::ScoringConfig;
use crate::repos::matches::MatchStore;
use crate::services::match_locks::MatchLocks;

pub use response::ThrowResponse;

/// Applies darts to matches held by a [`MatchStore`].
///
/// Throws for one match are serialized through [`MatchLocks`]; share the
/// same lock table with every other service that mutates matches.
#[derive(Clone)]
pub struct ScoringService {
    store: Arc<dyn MatchStore>,
    locks: Arc<MatchLocks>,
    config: ScoringConfig,
}

impl ScoringService {
    pub fn new(store: Arc<dyn MatchStore>, locks: Arc<MatchLocks>, config: ScoringConfig) -> Self {
        Self {
            store,
            locks,
            config,
        }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }
}
