//! The periodic movement and proximity scan.
//!
//! Each tick:
//!
//! 1. every living creature is shifted one step in a random direction per
//!    axis;
//! 2. every unordered pair `(i, j)`, `i < j`, whose members are both alive
//!    and within the kill distance becomes a `FightEvent` with `creatures[i]`
//!    as attacker and `creatures[j]` as defender.
//!
//! The scan is best-effort: a creature killed by the fight worker mid-tick
//! is skipped by later liveness checks in the same tick, but pairs already
//! emitted are not withdrawn.  The fight worker re-checks liveness anyway.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use arena_combat::{FightEvent, FightQueue};
use arena_core::{ArenaConfig, ArenaRng, Bounds};
use arena_creature::Creature;
use tracing::{debug, info};

/// What one [`Mover::tick`] did.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Living creatures asked to move.
    pub moved:  usize,
    /// Fight events submitted.
    pub fights: usize,
}

/// Moves creatures and submits fights for close pairs.
pub struct Mover {
    creatures:     Arc<[Arc<Creature>]>,
    queue:         Arc<FightQueue>,
    bounds:        Bounds,
    kill_distance: u32,
    scan_period:   Duration,
    poll_interval: Duration,
    rng:           ArenaRng,
}

impl Mover {
    pub fn new(
        creatures: Arc<[Arc<Creature>]>,
        queue:     Arc<FightQueue>,
        config:    &ArenaConfig,
        rng:       ArenaRng,
    ) -> Self {
        Self {
            creatures,
            queue,
            bounds:        config.bounds(),
            kill_distance: config.kill_distance,
            scan_period:   config.scan_period(),
            poll_interval: config.poll_interval(),
            rng,
        }
    }

    /// One move-then-scan pass.
    pub fn tick(&mut self) -> ScanStats {
        let moved = self.move_all();
        let events = self.scan();
        let fights = events.len();
        self.queue.extend(events);
        ScanStats { moved, fights }
    }

    fn move_all(&mut self) -> usize {
        let mut moved = 0;
        for creature in self.creatures.iter() {
            if !creature.is_alive() {
                continue;
            }
            let shift_x = self.rng.gen_range(-10..10);
            let shift_y = self.rng.gen_range(-10..10);
            creature.shift(shift_x, shift_y, self.bounds);
            moved += 1;
        }
        moved
    }

    /// Detect every close living pair, in ascending `(i, j)` order.
    pub fn scan(&self) -> Vec<FightEvent> {
        let creatures: &[Arc<Creature>] = &self.creatures;
        let distance = self.kill_distance;

        let pairs_from = move |i: usize| {
            let attacker = &creatures[i];
            creatures[i + 1..].iter().filter_map(move |defender| {
                let close = attacker.is_alive()
                    && defender.is_alive()
                    && attacker.is_close(defender, distance);
                close.then(|| FightEvent::new(Arc::clone(attacker), Arc::clone(defender)))
            })
        };

        #[cfg(not(feature = "parallel"))]
        {
            (0..creatures.len()).flat_map(pairs_from).collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            (0..creatures.len())
                .into_par_iter()
                .flat_map_iter(pairs_from)
                .collect()
        }
    }

    /// Tick every scan period until `shutdown` is set, counting ticks in
    /// `ticks`.
    ///
    /// The wait between ticks is sliced by the poll interval so shutdown is
    /// noticed within one poll interval rather than one scan period.
    pub fn run(mut self, shutdown: &AtomicBool, ticks: &AtomicU64) {
        info!(creatures = self.creatures.len(), "mover started");
        while !shutdown.load(Ordering::Acquire) {
            let stats = self.tick();
            let tick = ticks.fetch_add(1, Ordering::AcqRel) + 1;
            debug!(tick, moved = stats.moved, fights = stats.fights, "scan complete");
            self.wait(shutdown);
        }
        info!(ticks = ticks.load(Ordering::Acquire), "mover stopped");
    }

    fn wait(&self, shutdown: &AtomicBool) {
        let deadline = Instant::now() + self.scan_period;
        loop {
            if shutdown.load(Ordering::Acquire) {
                return;
            }
            let now = Instant::now();
            if now >= deadline {
                return;
            }
            thread::sleep(self.poll_interval.min(deadline - now));
        }
    }
}
