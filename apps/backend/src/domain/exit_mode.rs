//! In/out policies deciding which darts may open or close a leg.

use serde::{Deserialize, Serialize};

use crate::domain::catalog;
use crate::domain::throws::ThrowType;
use crate::errors::domain::{DomainError, ValidationKind};

/// Entry or exit rule of a match.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExitMode {
    /// Any dart may open or close the leg.
    #[default]
    Straight,
    /// Doubles (and the inner bull) only.
    Double,
    /// Doubles, triples and the inner bull.
    Master,
}

impl ExitMode {
    pub fn code(self) -> u8 {
        match self {
            ExitMode::Straight => 0,
            ExitMode::Double => 1,
            ExitMode::Master => 2,
        }
    }

    /// Whether `throw` is an acceptable last dart of a leg.
    pub fn admits(self, throw: ThrowType) -> bool {
        match self {
            ExitMode::Straight => true,
            ExitMode::Double => throw.is_double(),
            ExitMode::Master => throw.is_master(),
        }
    }

    /// Whether `throw` opens scoring for a player still at the starting score.
    pub fn allows_entry(self, score: u32, throw: ThrowType) -> bool {
        let remaining = score.checked_sub(throw.points());
        match self {
            ExitMode::Straight => remaining.is_some(),
            ExitMode::Double | ExitMode::Master => {
                self.admits(throw) && remaining.is_some_and(|r| r != 1)
            }
        }
    }

    /// Whether `throw` overshoots, or strands the player on a score of one
    /// that the mode can never finish.
    pub fn is_overthrow(self, score: u32, throw: ThrowType) -> bool {
        match (self, score.checked_sub(throw.points())) {
            (_, None) => true,
            (ExitMode::Double | ExitMode::Master, Some(1)) => true,
            _ => false,
        }
    }

    /// Catalog entries usable as the final dart, in descending value order.
    pub fn finishing_throws(self) -> &'static [ThrowType] {
        catalog::legal_finishing_throws(self)
    }
}

impl TryFrom<u8> for ExitMode {
    type Error = DomainError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(ExitMode::Straight),
            1 => Ok(ExitMode::Double),
            2 => Ok(ExitMode::Master),
            _ => Err(DomainError::validation(
                ValidationKind::InvalidExitMode,
                format!("Unknown in/out mode code: {code}"),
            )),
        }
    }
}
