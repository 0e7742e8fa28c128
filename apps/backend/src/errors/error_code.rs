//! Error codes for the darts scoring backend.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All error codes are SCREAMING_SNAKE_CASE.

use core::fmt;

/// Centralized error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// Throw code is not in the catalog
    InvalidThrow,
    /// In/out mode code is not recognised
    InvalidExitMode,
    /// Thrower is not the current player
    OutOfTurn,
    /// Starting score too low to play a leg
    InvalidStartScore,
    /// Empty or duplicated player list
    InvalidPlayers,
    /// General validation error
    ValidationError,

    // Resource Not Found
    /// No active match with the given id
    MatchNotActive,
    /// Match exists but the player is not part of it
    MatchPlayerNotFound,
    /// General not found error
    NotFound,

    // Conflicts
    /// Stored match version moved under us
    OptimisticLock,
    /// General conflict
    Conflict,

    // Persistence
    /// A collaborator write or read failed
    PersistenceFailure,
    /// A collaborator call did not complete in time
    StoreTimeout,
    /// Stored rows contradict each other
    DataCorruption,

    // System
    ConfigError,
    Internal,
}

impl ErrorCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidThrow => "INVALID_THROW",
            Self::InvalidExitMode => "INVALID_EXIT_MODE",
            Self::OutOfTurn => "OUT_OF_TURN",
            Self::InvalidStartScore => "INVALID_START_SCORE",
            Self::InvalidPlayers => "INVALID_PLAYERS",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::MatchNotActive => "MATCH_NOT_ACTIVE",
            Self::MatchPlayerNotFound => "MATCH_PLAYER_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",
            Self::OptimisticLock => "OPTIMISTIC_LOCK",
            Self::Conflict => "CONFLICT",
            Self::PersistenceFailure => "PERSISTENCE_FAILURE",
            Self::StoreTimeout => "STORE_TIMEOUT",
            Self::DataCorruption => "DATA_CORRUPTION",
            Self::ConfigError => "CONFIG_ERROR",
            Self::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
