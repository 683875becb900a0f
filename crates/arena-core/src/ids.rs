//! Strongly typed creature identifier.
//!
//! `CreatureId` is `Copy + Ord + Hash` so it works as a map key and sorts by
//! creation order.  Ids are handed out by the factory; they carry no meaning
//! beyond identity.

use std::fmt;

/// Identity of one creature, unique within a factory.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreatureId(pub u32);

impl CreatureId {
    /// Sentinel meaning "no valid ID".
    pub const INVALID: CreatureId = CreatureId(u32::MAX);

    /// The id following `self`.
    #[inline]
    pub fn next(self) -> CreatureId {
        CreatureId(self.0 + 1)
    }
}

impl Default for CreatureId {
    #[inline(always)]
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for CreatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
