//! The `Referee` seam: where a fight is actually decided.

use arena_creature::Creature;

use crate::{CombatError, CombatResult, FightEvent, resolve};

/// The decision for one fight event.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// A participant died after the event was queued; nothing happens.
    Stale,
    /// The fight took place.  `true` means the attacker killed the defender.
    Decided(bool),
}

/// Decides fight events for a [`FightScheduler`][crate::FightScheduler].
///
/// Returning an error whose [`is_transient`](CombatError::is_transient) is
/// `true` sends the event back to the tail of the queue unchanged.  The
/// referee must not notify observers or kill anyone; the scheduler applies
/// the verdict.
pub trait Referee: Send + Sync + 'static {
    fn judge(&self, event: &FightEvent) -> CombatResult<Verdict>;
}

/// The standard referee: applies [`resolve`] to the two kinds.
///
/// Both participants are inspected with a non-blocking snapshot.  If either
/// is locked by another thread (the mover, a renderer) the fight is reported
/// as [`CombatError::Contended`] and retried later instead of stalling the
/// worker.
#[derive(Copy, Clone, Debug, Default)]
pub struct TableReferee;

impl Referee for TableReferee {
    fn judge(&self, event: &FightEvent) -> CombatResult<Verdict> {
        let attacker = snapshot_alive(&event.attacker)?;
        let defender = snapshot_alive(&event.defender)?;
        if !(attacker && defender) {
            return Ok(Verdict::Stale);
        }
        Ok(Verdict::Decided(resolve(event.attacker.kind(), event.defender.kind())))
    }
}

fn snapshot_alive(creature: &Creature) -> CombatResult<bool> {
    creature
        .try_snapshot()
        .map(|s| s.alive)
        .ok_or_else(|| CombatError::Contended {
            id:   creature.id(),
            name: creature.name().to_owned(),
        })
}
