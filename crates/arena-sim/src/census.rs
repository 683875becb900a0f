//! Head counts and the winner decision.

use std::fmt;
use std::sync::Arc;

use arena_core::Kind;
use arena_creature::Creature;

/// Living creatures per kind, plus the dead.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Census {
    pub orcs:    usize,
    pub knights: usize,
    pub bears:   usize,
    pub dead:    usize,
}

/// Who is ahead.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Leader {
    /// One kind has strictly more survivors than each of the others.
    Faction(Kind),
    /// Nobody is left alive.
    Draw,
    /// Survivors exist but no single kind leads.
    Tie,
}

impl Census {
    /// Count `creatures`.  Each creature is sampled once; the result is not
    /// an atomic snapshot of the whole roster.
    pub fn take(creatures: &[Arc<Creature>]) -> Self {
        let mut census = Census::default();
        for c in creatures {
            if !c.is_alive() {
                census.dead += 1;
                continue;
            }
            match c.kind() {
                Kind::Orc    => census.orcs += 1,
                Kind::Knight => census.knights += 1,
                Kind::Bear   => census.bears += 1,
            }
        }
        census
    }

    pub fn alive_of(&self, kind: Kind) -> usize {
        match kind {
            Kind::Orc    => self.orcs,
            Kind::Knight => self.knights,
            Kind::Bear   => self.bears,
        }
    }

    pub fn alive(&self) -> usize {
        self.orcs + self.knights + self.bears
    }

    pub fn total(&self) -> usize {
        self.alive() + self.dead
    }

    pub fn leader(&self) -> Leader {
        let leader = Kind::ALL.into_iter().find(|&k| {
            Kind::ALL
                .into_iter()
                .filter(|&other| other != k)
                .all(|other| self.alive_of(k) > self.alive_of(other))
        });
        match leader {
            Some(kind) => Leader::Faction(kind),
            None if self.alive() == 0 => Leader::Draw,
            None => Leader::Tie,
        }
    }
}

impl fmt::Display for Census {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Knights: {}, Orcs: {}, Bears: {}, Dead: {}, Total: {}",
            self.knights,
            self.orcs,
            self.bears,
            self.dead,
            self.total()
        )
    }
}
