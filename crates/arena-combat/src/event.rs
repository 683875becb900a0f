//! A pending fight between two shared creatures.

use std::fmt;
use std::sync::Arc;

use arena_creature::Creature;

/// A request for `attacker` to fight `defender`.
///
/// Holds shared handles, not copies: either creature may die while the event
/// waits in the queue, so liveness is re-checked when it is processed.
#[derive(Clone)]
pub struct FightEvent {
    pub attacker: Arc<Creature>,
    pub defender: Arc<Creature>,
    retries:      u32,
}

impl FightEvent {
    pub fn new(attacker: Arc<Creature>, defender: Arc<Creature>) -> Self {
        Self { attacker, defender, retries: 0 }
    }

    /// How many times this event has been pushed back after a transient
    /// failure.
    #[inline]
    pub fn retries(&self) -> u32 {
        self.retries
    }

    /// The same event with its retry counter bumped.
    pub(crate) fn retried(mut self) -> Self {
        self.retries = self.retries.saturating_add(1);
        self
    }
}

impl fmt::Debug for FightEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FightEvent")
            .field("attacker", &self.attacker.id())
            .field("defender", &self.defender.id())
            .field("retries", &self.retries)
            .finish()
    }
}
