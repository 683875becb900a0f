//! The closed set of creature kinds.
//!
//! The set is fixed at compile time.  Every per-kind rule (step size, map
//! symbol, serialization tag, combat table) is a `match` over this enum, so
//! adding a variant is a compile error everywhere a rule is missing.

use std::fmt;

use crate::ArenaError;

/// A creature category.  The three kinds form a rock-paper-scissors cycle:
/// Orc beats Bear, Bear beats Knight, Knight beats Orc.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Kind {
    Orc,
    Knight,
    Bear,
}

impl Kind {
    /// Every kind, in tag order.
    pub const ALL: [Kind; 3] = [Kind::Orc, Kind::Knight, Kind::Bear];

    /// Integer tag used by the text record format.  `0` is never produced.
    #[inline]
    pub fn tag(self) -> u8 {
        match self {
            Kind::Orc    => 1,
            Kind::Knight => 2,
            Kind::Bear   => 3,
        }
    }

    /// Inverse of [`tag`](Self::tag).  Returns `None` for anything else.
    pub fn from_tag(tag: i64) -> Option<Kind> {
        match tag {
            1 => Some(Kind::Orc),
            2 => Some(Kind::Knight),
            3 => Some(Kind::Bear),
            _ => None,
        }
    }

    /// Distance covered per axis per move, regardless of the requested shift.
    #[inline]
    pub fn step(self) -> i32 {
        match self {
            Kind::Orc    => 20,
            Kind::Knight => 30,
            Kind::Bear   => 5,
        }
    }

    /// Single-letter map symbol.
    pub fn symbol(self) -> char {
        match self {
            Kind::Orc    => 'O',
            Kind::Knight => 'K',
            Kind::Bear   => 'B',
        }
    }

    /// Singular display name, e.g. `"Knight"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Orc    => "Orc",
            Kind::Knight => "Knight",
            Kind::Bear   => "Bear",
        }
    }
}

impl TryFrom<i64> for Kind {
    type Error = ArenaError;

    fn try_from(tag: i64) -> Result<Kind, ArenaError> {
        Kind::from_tag(tag).ok_or(ArenaError::UnknownKind(tag))
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
