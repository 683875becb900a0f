//! `FightScheduler` — the fight worker.
//!
//! # Per-event state machine
//!
//! ```text
//! queued ──pop──▶ in-flight ──▶ resolved     (notified; defender killed if it lost)
//!                          ├──▶ dropped      (a participant is already dead)
//!                          └──▶ re-queued    (transient failure → tail of queue)
//! ```
//!
//! Retries are unbounded.  An event that fails transiently forever keeps
//! cycling through the queue; `ArenaConfig::retry_warn_threshold` only makes
//! such an event visible in the logs.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::thread;
use std::time::Duration;

use arena_core::ArenaConfig;
use arena_creature::Creature;
use tracing::{debug, info, trace, warn};

use crate::{FightQueue, Referee, TableReferee, Verdict};

// ── Stats ─────────────────────────────────────────────────────────────────────

/// Live counters, readable from any thread while the worker runs.
#[derive(Debug, Default)]
pub struct SchedulerStats {
    resolved: AtomicU64,
    kills:    AtomicU64,
    dropped:  AtomicU64,
    requeued: AtomicU64,
}

/// A point-in-time copy of [`SchedulerStats`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct StatsSnapshot {
    /// Events that reached a verdict (win or not).
    pub resolved: u64,
    /// Resolved events that killed the defender.
    pub kills:    u64,
    /// Stale or rejected events.
    pub dropped:  u64,
    /// Re-queue operations (one event may count many times).
    pub requeued: u64,
}

impl SchedulerStats {
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            resolved: self.resolved.load(Ordering::Relaxed),
            kills:    self.kills.load(Ordering::Relaxed),
            dropped:  self.dropped.load(Ordering::Relaxed),
            requeued: self.requeued.load(Ordering::Relaxed),
        }
    }

    fn bump(counter: &AtomicU64) {
        counter.fetch_add(1, Ordering::Relaxed);
    }
}

// ── Step ──────────────────────────────────────────────────────────────────────

/// What one call to [`FightScheduler::process_next`] did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// The queue was empty.
    Idle,
    /// The event was discarded without a fight.
    Dropped,
    /// The fight happened; `true` means the defender was killed.
    Resolved { attacker_wins: bool },
    /// The event went back to the tail after its `retries`-th failure.
    Requeued { retries: u32 },
}

// ── FightScheduler ────────────────────────────────────────────────────────────

/// Consumes [`FightEvent`][crate::FightEvent]s from a shared [`FightQueue`]
/// and applies their outcome.
///
/// Use [`process_next`](Self::process_next) to drive it by hand (tests,
/// single-threaded tools) or [`run`](Self::run) on a dedicated thread.
pub struct FightScheduler<R: Referee = TableReferee> {
    queue:                Arc<FightQueue>,
    referee:              R,
    stats:                Arc<SchedulerStats>,
    poll_interval:        Duration,
    retry_warn_threshold: Option<u32>,
}

impl FightScheduler<TableReferee> {
    /// A scheduler using the standard outcome table.
    pub fn new(queue: Arc<FightQueue>, config: &ArenaConfig) -> Self {
        Self::with_referee(queue, TableReferee, config)
    }
}

impl<R: Referee> FightScheduler<R> {
    /// A scheduler deciding fights with `referee`.  A `retry_warn_threshold`
    /// of `Some(0)` is treated as `None`.
    pub fn with_referee(queue: Arc<FightQueue>, referee: R, config: &ArenaConfig) -> Self {
        Self {
            queue,
            referee,
            stats:                Arc::new(SchedulerStats::default()),
            poll_interval:        config.poll_interval(),
            retry_warn_threshold: config.retry_warn_threshold.filter(|&t| t != 0),
        }
    }

    pub fn queue(&self) -> &Arc<FightQueue> {
        &self.queue
    }

    /// Shared handle to the live counters.
    pub fn stats(&self) -> Arc<SchedulerStats> {
        Arc::clone(&self.stats)
    }

    /// Pop and process at most one event.
    pub fn process_next(&self) -> Step {
        let Some(event) = self.queue.pop() else {
            return Step::Idle;
        };

        if known_dead(&event.attacker) || known_dead(&event.defender) {
            trace!(?event, "stale fight dropped");
            SchedulerStats::bump(&self.stats.dropped);
            return Step::Dropped;
        }

        match self.referee.judge(&event) {
            Ok(Verdict::Decided(attacker_wins)) => {
                event.attacker.notify(&event.defender, attacker_wins);
                if attacker_wins && event.defender.kill() {
                    SchedulerStats::bump(&self.stats.kills);
                    info!(
                        attacker = event.attacker.name(),
                        attacker_kind = %event.attacker.kind(),
                        defender = event.defender.name(),
                        defender_kind = %event.defender.kind(),
                        "creature killed"
                    );
                } else {
                    debug!(?event, attacker_wins, "fight resolved");
                }
                SchedulerStats::bump(&self.stats.resolved);
                Step::Resolved { attacker_wins }
            }
            Ok(Verdict::Stale) => {
                trace!(?event, "stale fight dropped");
                SchedulerStats::bump(&self.stats.dropped);
                Step::Dropped
            }
            Err(e) if e.is_transient() => {
                let event = event.retried();
                let retries = event.retries();
                if self.retry_warn_threshold.is_some_and(|t| t != 0 && retries % t == 0) {
                    warn!(?event, error = %e, retries, "fight keeps failing; still retrying");
                } else {
                    debug!(?event, error = %e, "fight re-queued");
                }
                self.queue.push(event);
                SchedulerStats::bump(&self.stats.requeued);
                Step::Requeued { retries }
            }
            Err(e) => {
                warn!(?event, error = %e, "fight dropped");
                SchedulerStats::bump(&self.stats.dropped);
                Step::Dropped
            }
        }
    }

    /// Worker loop.  Processes events until `shutdown` is set, sleeping for
    /// the poll interval whenever the queue is empty.
    ///
    /// Events still queued at shutdown are discarded unresolved; the number
    /// discarded is returned.
    pub fn run(&self, shutdown: &AtomicBool) -> usize {
        info!("fight worker started");
        while !shutdown.load(Ordering::Acquire) {
            if self.process_next() == Step::Idle {
                thread::sleep(self.poll_interval);
            }
        }
        let discarded = self.queue.clear();
        info!(discarded, stats = ?self.stats.snapshot(), "fight worker stopped");
        discarded
    }
}

/// `true` only if `creature` is dead and its lock was free to check.  A busy
/// creature is left to the referee, which reports the contention.
fn known_dead(creature: &Creature) -> bool {
    creature.try_snapshot().is_some_and(|s| !s.alive)
}
