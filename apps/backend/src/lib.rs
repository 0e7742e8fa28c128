#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod repos;
pub mod services;
pub mod telemetry;

// Re-exports for public API
pub use adapters::matches_memory::MemoryMatchStore;
pub use config::ScoringConfig;
pub use domain::{
    find_checkout, BustReason, Checkout, ExitMode, Match, MatchId, MatchPlayerState, PlayerId,
    ThrowEvent, ThrowType,
};
pub use error::AppError;
pub use errors::ErrorCode;
pub use repos::matches::MatchStore;
pub use services::{MatchLocks, MatchService, MatchView, NewMatch, ScoringService, ThrowResponse};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    backend_test_support::logging::init();
}
