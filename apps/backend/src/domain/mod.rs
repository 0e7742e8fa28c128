//! Domain layer: pure darts scoring types and rules.

pub mod catalog;
pub mod checkout;
pub mod exit_mode;
pub mod state;
pub mod throws;
pub mod turn;

#[cfg(test)]
mod tests_turn;

// Re-exports for ergonomics
pub use checkout::{find_checkout, Checkout, DARTS_PER_TURN};
pub use exit_mode::ExitMode;
pub use state::{Match, MatchId, MatchPhase, MatchPlayerState, PlayerId, ThrowEvent};
pub use throws::{Ring, ThrowType};
pub use turn::{apply_throw, BustReason, ThrowOutcome, TurnResult};
