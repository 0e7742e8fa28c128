//! Ordered views over the throw catalog.
//!
//! The descending order is load-bearing: the checkout search walks these
//! tables front to back and returns the first sequence that works.

use std::cmp::Reverse;

use once_cell::sync::Lazy;

use crate::domain::exit_mode::ExitMode;
use crate::domain::throws::ThrowType;

static BY_DESCENDING_VALUE: Lazy<Vec<ThrowType>> = Lazy::new(|| {
    let mut all = ThrowType::ALL.to_vec();
    // stable sort keeps enumeration order among equal values
    all.sort_by_key(|t| Reverse(t.points()));
    all
});

static DOUBLE_FINISHES: Lazy<Vec<ThrowType>> =
    Lazy::new(|| filtered(|t| ExitMode::Double.admits(t)));

static MASTER_FINISHES: Lazy<Vec<ThrowType>> =
    Lazy::new(|| filtered(|t| ExitMode::Master.admits(t)));

fn filtered(keep: impl Fn(ThrowType) -> bool) -> Vec<ThrowType> {
    BY_DESCENDING_VALUE
        .iter()
        .copied()
        .filter(|&t| keep(t))
        .collect()
}

/// Every catalog entry, highest value first; ties in enumeration order.
pub fn all_by_descending_value() -> &'static [ThrowType] {
    &BY_DESCENDING_VALUE
}

/// Entries usable as the last dart under `mode`, in the same order as
/// [`all_by_descending_value`].
pub fn legal_finishing_throws(mode: ExitMode) -> &'static [ThrowType] {
    match mode {
        ExitMode::Straight => &BY_DESCENDING_VALUE,
        ExitMode::Double => &DOUBLE_FINISHES,
        ExitMode::Master => &MASTER_FINISHES,
    }
}
