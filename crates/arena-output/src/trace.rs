use arena_creature::{Creature, FightObserver};
use tracing::{debug, info};

/// Reports fights as `tracing` events: a win at `info`, anything else at
/// `debug`.
#[derive(Copy, Clone, Debug, Default)]
pub struct TracingObserver;

impl FightObserver for TracingObserver {
    fn on_fight(&self, attacker: &Creature, defender: &Creature, won: bool) {
        if won {
            info!(attacker = %attacker, defender = %defender, "murder");
        } else {
            debug!(attacker = %attacker, defender = %defender, "defender survived");
        }
    }
}
