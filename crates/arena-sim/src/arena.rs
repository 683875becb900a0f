//! `Arena` (stopped) and `RunningArena` (threads live).

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::thread::{self, JoinHandle};

use arena_combat::{FightQueue, FightScheduler, Referee, SchedulerStats, StatsSnapshot, Step};
use arena_core::ArenaConfig;
use arena_creature::Creature;
use tracing::{info, warn};

use crate::{Census, Mover, ScanStats, SimError, SimResult};

// ── Arena ─────────────────────────────────────────────────────────────────────

/// A fully configured arena whose background loops have not started.
///
/// Owns the shared roster, the fight queue, the mover, and the fight worker.
/// Drive it by hand with [`step`](Self::step) and
/// [`resolve_pending`](Self::resolve_pending), or hand it to its own threads
/// with [`start`](Self::start).
///
/// Create via [`ArenaBuilder`][crate::ArenaBuilder].
pub struct Arena<R: Referee> {
    pub(crate) config:    ArenaConfig,
    pub(crate) creatures: Arc<[Arc<Creature>]>,
    pub(crate) mover:     Mover,
    pub(crate) scheduler: FightScheduler<R>,
}

impl<R: Referee> Arena<R> {
    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    pub fn creatures(&self) -> &[Arc<Creature>] {
        &self.creatures
    }

    pub fn queue(&self) -> &Arc<FightQueue> {
        self.scheduler.queue()
    }

    pub fn census(&self) -> Census {
        Census::take(&self.creatures)
    }

    pub fn stats(&self) -> StatsSnapshot {
        self.scheduler.stats().snapshot()
    }

    /// Run one mover tick on the calling thread.
    pub fn step(&mut self) -> ScanStats {
        self.mover.tick()
    }

    /// Process the events queued right now on the calling thread.
    ///
    /// Events re-queued during this call are left for the next call, so this
    /// always terminates.  Returns the number of steps taken.
    pub fn resolve_pending(&self) -> usize {
        let pending = self.queue().len();
        (0..pending)
            .take_while(|_| self.scheduler.process_next() != Step::Idle)
            .count()
    }

    /// Spawn the mover and fight-worker threads.
    pub fn start(self) -> SimResult<RunningArena> {
        let shutdown = Arc::new(AtomicBool::new(false));
        let ticks = Arc::new(AtomicU64::new(0));
        let stats = self.scheduler.stats();
        let queue = Arc::clone(self.scheduler.queue());
        let creatures = Arc::clone(&self.creatures);

        let mover = {
            let shutdown = Arc::clone(&shutdown);
            let ticks = Arc::clone(&ticks);
            let mover = self.mover;
            thread::Builder::new()
                .name("arena-mover".into())
                .spawn(move || mover.run(&shutdown, &ticks))
                .map_err(|source| SimError::Spawn { thread: "mover", source })?
        };

        let scheduler = self.scheduler;
        let worker = {
            let shutdown_flag = Arc::clone(&shutdown);
            thread::Builder::new()
                .name("arena-fights".into())
                .spawn(move || scheduler.run(&shutdown_flag))
        };
        let worker = match worker {
            Ok(handle) => handle,
            Err(source) => {
                shutdown.store(true, Ordering::Release);
                if mover.join().is_err() {
                    warn!("mover panicked while aborting start");
                }
                return Err(SimError::Spawn { thread: "fight worker", source });
            }
        };

        info!(creatures = creatures.len(), "arena started");
        Ok(RunningArena { creatures, queue, stats, shutdown, ticks, mover, worker })
    }
}

// ── RunningArena ──────────────────────────────────────────────────────────────

/// Handle to an arena whose mover and fight worker are running.
///
/// Call [`stop`](Self::stop) to end the run; dropping the handle detaches
/// both threads and leaves them running.
pub struct RunningArena {
    creatures: Arc<[Arc<Creature>]>,
    queue:     Arc<FightQueue>,
    stats:     Arc<SchedulerStats>,
    shutdown:  Arc<AtomicBool>,
    ticks:     Arc<AtomicU64>,
    mover:     JoinHandle<()>,
    worker:    JoinHandle<usize>,
}

impl RunningArena {
    pub fn creatures(&self) -> &[Arc<Creature>] {
        &self.creatures
    }

    /// Mover ticks completed so far.
    pub fn ticks(&self) -> u64 {
        self.ticks.load(Ordering::Acquire)
    }

    pub fn census(&self) -> Census {
        Census::take(&self.creatures)
    }

    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    /// Fight events waiting for the worker.
    pub fn queued(&self) -> usize {
        self.queue.len()
    }

    /// Signal shutdown, wait for both threads, and report.
    ///
    /// Blocks for at most about one poll interval plus the duration of the
    /// tick or fight in progress.
    pub fn stop(self) -> SimResult<ArenaReport> {
        self.shutdown.store(true, Ordering::Release);

        let mover = self.mover.join().map_err(|_| SimError::Panicked("mover"));
        let worker = self.worker.join().map_err(|_| SimError::Panicked("fight worker"));
        mover?;
        let discarded = worker?;

        let report = ArenaReport {
            ticks:     self.ticks.load(Ordering::Acquire),
            stats:     self.stats.snapshot(),
            discarded,
            census:    Census::take(&self.creatures),
            creatures: self.creatures.to_vec(),
        };
        info!(ticks = report.ticks, discarded, census = %report.census, "arena stopped");
        Ok(report)
    }
}

// ── ArenaReport ───────────────────────────────────────────────────────────────

/// Final state returned by [`RunningArena::stop`].
#[derive(Debug, Clone)]
pub struct ArenaReport {
    /// Mover ticks completed.
    pub ticks:     u64,
    pub stats:     StatsSnapshot,
    /// Fight events still queued at shutdown, discarded unresolved.
    pub discarded: usize,
    pub census:    Census,
    pub creatures: Vec<Arc<Creature>>,
}
