//! Fight notification interface.

use crate::Creature;

/// Receives the outcome of every resolved fight.
///
/// Observers are subscribed per creature and invoked synchronously, in
/// subscription order, on the thread that resolved the fight.  The attacker's
/// lock is *not* held during the call, so an observer may freely read either
/// creature (`position()`, `is_alive()`, `Display`, …).
///
/// `won` is reported for every resolution; implementations decide whether a
/// `false` outcome is worth recording.  Implementations must return promptly:
/// a blocked observer stalls the fight worker.
///
/// # Example
///
/// ```rust
/// use arena_creature::{Creature, FightObserver};
///
/// struct KillPrinter;
///
/// impl FightObserver for KillPrinter {
///     fn on_fight(&self, attacker: &Creature, defender: &Creature, won: bool) {
///         if won {
///             println!("{} killed {}", attacker.name(), defender.name());
///         }
///     }
/// }
/// ```
pub trait FightObserver: Send + Sync {
    fn on_fight(&self, attacker: &Creature, defender: &Creature, won: bool);
}
