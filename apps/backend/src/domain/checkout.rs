//! Checkout (finish) calculator.
//!
//! Depth-first search over at most three darts. Candidates are tried from the
//! highest value down, so the first hit reproduces the usual checkout-chart
//! answer ("biggest throws first"), and backtracking guarantees a sequence is
//! found whenever one exists under the exit rule.

use serde::Serialize;

use crate::domain::catalog;
use crate::domain::exit_mode::ExitMode;
use crate::domain::throws::{ThrowType, MAX_DART_POINTS};

pub const DARTS_PER_TURN: u8 = 3;

/// Throws that take a score to exactly zero, earliest dart first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Checkout(Vec<ThrowType>);

impl Checkout {
    pub fn throws(&self) -> &[ThrowType] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn total(&self) -> u32 {
        self.0.iter().map(|t| t.points()).sum()
    }

    /// The dart that has to be thrown next.
    pub fn first(&self) -> Option<ThrowType> {
        self.0.first().copied()
    }

    /// The dart that closes the leg.
    pub fn finishing_throw(&self) -> Option<ThrowType> {
        self.0.last().copied()
    }

    pub fn into_throws(self) -> Vec<ThrowType> {
        self.0
    }
}

/// Whether `remaining` can be covered by `darts_left` maximum-value darts.
pub fn in_range(remaining: u32, darts_left: u8) -> bool {
    remaining <= MAX_DART_POINTS * u32::from(darts_left)
}

/// Find a sequence of at most `darts_left` throws reducing `remaining` to
/// exactly zero, whose final dart satisfies `exit_mode`.
///
/// Returns `None` when no such sequence exists, and for the inputs the state
/// machine never produces (`remaining == 0`, `darts_left` outside `1..=3`).
pub fn find_checkout(remaining: u32, darts_left: u8, exit_mode: ExitMode) -> Option<Checkout> {
    if remaining == 0 || darts_left == 0 || darts_left > DARTS_PER_TURN {
        return None;
    }
    if !in_range(remaining, darts_left) {
        return None;
    }

    let mut path = Vec::with_capacity(usize::from(darts_left));
    search(remaining, darts_left, exit_mode, &mut path).then_some(Checkout(path))
}

fn search(score: u32, darts_left: u8, exit_mode: ExitMode, path: &mut Vec<ThrowType>) -> bool {
    // On the last available dart only a legal finisher can help.
    let candidates = if darts_left == 1 {
        catalog::legal_finishing_throws(exit_mode)
    } else {
        catalog::all_by_descending_value()
    };

    for &throw in candidates {
        let Some(rest) = score.checked_sub(throw.points()) else {
            continue;
        };

        if rest == 0 {
            if exit_mode.admits(throw) {
                path.push(throw);
                return true;
            }
            continue;
        }

        if darts_left > 1 && in_range(rest, darts_left - 1) {
            path.push(throw);
            if search(rest, darts_left - 1, exit_mode, path) {
                return true;
            }
            path.pop();
        }
    }

    false
}
