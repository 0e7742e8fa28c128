//! Orchestration over the domain and the match store.

pub mod match_locks;
pub mod matches;
pub mod scoring;
mod store_call;

pub use match_locks::MatchLocks;
pub use matches::{HistoryEntry, MatchService, MatchView, NewMatch};
pub use scoring::{ScoringService, ThrowResponse};
