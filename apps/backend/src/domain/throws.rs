//! Core throw types: every legal dart outcome and its fixed point value.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::domain::{DomainError, ValidationKind};

/// Highest value a single dart can score (Triple-20).
pub const MAX_DART_POINTS: u32 = 60;

/// Bed of the board a dart landed in.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Ring {
    Single,
    Double,
    Triple,
    OuterBull,
    InnerBull,
}

/// One legal dart outcome.
///
/// Discriminants are the stable wire codes (1..=62); the derived ordering is
/// the fixed enumeration order used to break ties between equal values.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(u8)]
pub enum ThrowType {
    S1 = 1,
    S2,
    S3,
    S4,
    S5,
    S6,
    S7,
    S8,
    S9,
    S10,
    S11,
    S12,
    S13,
    S14,
    S15,
    S16,
    S17,
    S18,
    S19,
    S20,
    D1,
    D2,
    D3,
    D4,
    D5,
    D6,
    D7,
    D8,
    D9,
    D10,
    D11,
    D12,
    D13,
    D14,
    D15,
    D16,
    D17,
    D18,
    D19,
    D20,
    T1,
    T2,
    T3,
    T4,
    T5,
    T6,
    T7,
    T8,
    T9,
    T10,
    T11,
    T12,
    T13,
    T14,
    T15,
    T16,
    T17,
    T18,
    T19,
    T20,
    OuterBull,
    InnerBull,
}

use ThrowType::{
    InnerBull, OuterBull, D1, D10, D11, D12, D13, D14, D15, D16, D17, D18, D19, D2, D20, D3, D4,
    D5, D6, D7, D8, D9, S1, S10, S11, S12, S13, S14, S15, S16, S17, S18, S19, S2, S20, S3, S4,
    S5, S6, S7, S8, S9, T1, T10, T11, T12, T13, T14, T15, T16, T17, T18, T19, T2, T20, T3, T4,
    T5, T6, T7, T8, T9,
};

impl ThrowType {
    /// Every catalog entry in enumeration order.
    pub const ALL: [ThrowType; 62] = [
        S1, S2, S3, S4, S5, S6, S7, S8, S9, S10, S11, S12, S13, S14, S15, S16, S17, S18, S19, S20,
        D1, D2, D3, D4, D5, D6, D7, D8, D9, D10, D11, D12, D13, D14, D15, D16, D17, D18, D19, D20,
        T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11, T12, T13, T14, T15, T16, T17, T18, T19, T20,
        OuterBull, InnerBull,
    ];

    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn ring(self) -> Ring {
        match self.code() {
            1..=20 => Ring::Single,
            21..=40 => Ring::Double,
            41..=60 => Ring::Triple,
            61 => Ring::OuterBull,
            _ => Ring::InnerBull,
        }
    }

    /// Board number 1..=20 for numbered beds, `None` for the bulls.
    pub fn number(self) -> Option<u8> {
        let code = self.code();
        match self.ring() {
            Ring::Single => Some(code),
            Ring::Double => Some(code - 20),
            Ring::Triple => Some(code - 40),
            Ring::OuterBull | Ring::InnerBull => None,
        }
    }

    pub fn points(self) -> u32 {
        let code = u32::from(self.code());
        match self.ring() {
            Ring::Single => code,
            Ring::Double => 2 * (code - 20),
            Ring::Triple => 3 * (code - 40),
            Ring::OuterBull => 25,
            Ring::InnerBull => 50,
        }
    }

    /// Doubles, plus the inner bull which counts as a double for exit purposes.
    pub fn is_double(self) -> bool {
        matches!(self.ring(), Ring::Double | Ring::InnerBull)
    }

    /// Any double or triple, plus the inner bull.
    pub fn is_master(self) -> bool {
        matches!(self.ring(), Ring::Double | Ring::Triple | Ring::InnerBull)
    }
}

impl TryFrom<u8> for ThrowType {
    type Error = DomainError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        code.checked_sub(1)
            .and_then(|idx| ThrowType::ALL.get(usize::from(idx)))
            .copied()
            .ok_or_else(|| {
                DomainError::validation(
                    ValidationKind::InvalidThrow,
                    format!("Unknown throw code: {code}"),
                )
            })
    }
}

impl fmt::Display for ThrowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = self.code();
        match self.ring() {
            Ring::Single => write!(f, "S{code}"),
            Ring::Double => write!(f, "D{}", code - 20),
            Ring::Triple => write!(f, "T{}", code - 40),
            Ring::OuterBull => f.write_str("SBULL"),
            Ring::InnerBull => f.write_str("BULL"),
        }
    }
}

impl FromStr for ThrowType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || {
            DomainError::validation(ValidationKind::InvalidThrow, format!("Parse throw: {s}"))
        };
        match s {
            "SBULL" => return Ok(OuterBull),
            "BULL" => return Ok(InnerBull),
            _ => {}
        }
        let (ring, digits) = s.split_at_checked(1).ok_or_else(invalid)?;
        // reject "S01", "D+5" and friends so names stay canonical
        if digits.starts_with('0') || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let n: u8 = digits.parse().map_err(|_| invalid())?;
        if !(1..=20).contains(&n) {
            return Err(invalid());
        }
        let base = match ring {
            "S" => 0,
            "D" => 20,
            "T" => 40,
            _ => return Err(invalid()),
        };
        ThrowType::try_from(base + n)
    }
}

impl Serialize for ThrowType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ThrowType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse()
            .map_err(|_| serde::de::Error::custom(format!("Invalid throw: {s}")))
    }
}
