//! Unit and concurrency tests for arena-combat.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use arena_core::{ArenaConfig, CreatureId, Kind, Position};
use arena_creature::{Creature, FightObserver};

use crate::{CombatError, CombatResult, FightEvent, FightQueue, FightScheduler, Referee, Step, Verdict};

// ── Helpers ───────────────────────────────────────────────────────────────────

#[derive(Default)]
struct Recorder {
    seen: Mutex<Vec<(CreatureId, CreatureId, bool)>>,
}

impl Recorder {
    fn calls(&self) -> Vec<(CreatureId, CreatureId, bool)> {
        self.seen.lock().unwrap().clone()
    }
}

impl FightObserver for Recorder {
    fn on_fight(&self, attacker: &Creature, defender: &Creature, won: bool) {
        self.seen.lock().unwrap().push((attacker.id(), defender.id(), won));
    }
}

fn creature(id: u32, kind: Kind, recorder: &Arc<Recorder>) -> Arc<Creature> {
    let c = Creature::new(CreatureId(id), kind, Position::new(0, 0), format!("{kind}{id}"));
    c.subscribe(recorder.clone());
    Arc::new(c)
}

fn scheduler() -> FightScheduler {
    FightScheduler::new(Arc::new(FightQueue::new()), &ArenaConfig::default())
}

// ── Outcome table ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod rules_tests {
    use arena_core::Kind;

    use crate::resolve;

    #[test]
    fn cycle() {
        assert!(resolve(Kind::Orc, Kind::Bear));
        assert!(resolve(Kind::Bear, Kind::Knight));
        assert!(resolve(Kind::Knight, Kind::Orc));
    }

    #[test]
    fn same_kind_never_wins() {
        for k in Kind::ALL {
            assert!(!resolve(k, k), "{k} vs {k}");
        }
    }

    #[test]
    fn cross_kind_is_antisymmetric() {
        for a in Kind::ALL {
            for d in Kind::ALL {
                if a != d {
                    assert_ne!(resolve(a, d), resolve(d, a), "{a} vs {d}");
                }
            }
        }
    }
}

// ── Queue ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod queue_tests {
    use super::*;

    #[test]
    fn fifo_order() {
        let rec = Arc::new(Recorder::default());
        let a = creature(0, Kind::Orc, &rec);
        let b = creature(1, Kind::Bear, &rec);
        let q = FightQueue::new();
        q.push(FightEvent::new(a.clone(), b.clone()));
        q.push(FightEvent::new(b.clone(), a.clone()));
        assert_eq!(q.len(), 2);
        assert_eq!(q.pop().unwrap().attacker.id(), CreatureId(0));
        assert_eq!(q.pop().unwrap().attacker.id(), CreatureId(1));
        assert!(q.pop().is_none());
    }

    #[test]
    fn clear_reports_discarded() {
        let rec = Arc::new(Recorder::default());
        let a = creature(0, Kind::Orc, &rec);
        let q = FightQueue::new();
        q.extend((0..3).map(|_| FightEvent::new(a.clone(), a.clone())));
        assert_eq!(q.clear(), 3);
        assert!(q.is_empty());
    }
}

// ── Scheduler, single-threaded ────────────────────────────────────────────────

#[cfg(test)]
mod scheduler_tests {
    use super::*;

    #[test]
    fn empty_queue_is_idle() {
        assert_eq!(scheduler().process_next(), Step::Idle);
    }

    #[test]
    fn winning_attacker_kills_defender_and_notifies_once() {
        let rec = Arc::new(Recorder::default());
        let orc = creature(0, Kind::Orc, &rec);
        let bear = creature(1, Kind::Bear, &rec);
        let s = scheduler();
        s.queue().push(FightEvent::new(orc.clone(), bear.clone()));

        assert_eq!(s.process_next(), Step::Resolved { attacker_wins: true });
        assert!(!bear.is_alive());
        assert!(orc.is_alive());
        assert_eq!(rec.calls(), vec![(CreatureId(0), CreatureId(1), true)]);
        let stats = s.stats().snapshot();
        assert_eq!((stats.resolved, stats.kills), (1, 1));
    }

    #[test]
    fn losing_attacker_survives_and_defender_survives() {
        let rec = Arc::new(Recorder::default());
        let bear = creature(0, Kind::Bear, &rec);
        let orc = creature(1, Kind::Orc, &rec);
        let s = scheduler();
        s.queue().push(FightEvent::new(bear.clone(), orc.clone()));

        assert_eq!(s.process_next(), Step::Resolved { attacker_wins: false });
        assert!(bear.is_alive());
        assert!(orc.is_alive());
        assert_eq!(rec.calls(), vec![(CreatureId(0), CreatureId(1), false)]);
    }

    #[test]
    fn same_kind_fight_is_a_notified_draw() {
        let rec = Arc::new(Recorder::default());
        let a = creature(0, Kind::Knight, &rec);
        let b = creature(1, Kind::Knight, &rec);
        let s = scheduler();
        s.queue().push(FightEvent::new(a.clone(), b.clone()));

        assert_eq!(s.process_next(), Step::Resolved { attacker_wins: false });
        assert!(a.is_alive() && b.is_alive());
        assert_eq!(rec.calls().len(), 1);
        assert!(!rec.calls()[0].2);
    }

    #[test]
    fn dead_defender_produces_no_notification() {
        let rec = Arc::new(Recorder::default());
        let orc = creature(0, Kind::Orc, &rec);
        let bear = creature(1, Kind::Bear, &rec);
        bear.kill();
        let s = scheduler();
        s.queue().push(FightEvent::new(orc.clone(), bear.clone()));

        assert_eq!(s.process_next(), Step::Dropped);
        assert!(rec.calls().is_empty());
        assert!(orc.is_alive());
        assert_eq!(s.stats().snapshot().dropped, 1);
    }

    #[test]
    fn second_event_against_same_victim_is_dropped() {
        let rec = Arc::new(Recorder::default());
        let orc1 = creature(0, Kind::Orc, &rec);
        let orc2 = creature(1, Kind::Orc, &rec);
        let bear = creature(2, Kind::Bear, &rec);
        let s = scheduler();
        s.queue().push(FightEvent::new(orc1, bear.clone()));
        s.queue().push(FightEvent::new(orc2, bear.clone()));

        assert_eq!(s.process_next(), Step::Resolved { attacker_wins: true });
        assert_eq!(s.process_next(), Step::Dropped);
        assert_eq!(rec.calls().len(), 1);
        assert_eq!(s.stats().snapshot().kills, 1);
    }
}

// ── Retry policy ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod retry_tests {
    use super::*;

    /// Fails transiently `failures` times, then defers to the table.
    struct Flaky {
        failures: AtomicU32,
    }

    impl Referee for Flaky {
        fn judge(&self, event: &FightEvent) -> CombatResult<Verdict> {
            let left = self.failures.load(Ordering::SeqCst);
            if left > 0 {
                self.failures.store(left - 1, Ordering::SeqCst);
                return Err(CombatError::Contended {
                    id:   event.defender.id(),
                    name: event.defender.name().to_owned(),
                });
            }
            crate::TableReferee.judge(event)
        }
    }

    struct Refuses;

    impl Referee for Refuses {
        fn judge(&self, _event: &FightEvent) -> CombatResult<Verdict> {
            Err(CombatError::Rejected("no fighting on Sundays".into()))
        }
    }

    #[test]
    fn transient_failure_requeues_at_tail() {
        let rec = Arc::new(Recorder::default());
        let orc = creature(0, Kind::Orc, &rec);
        let bear = creature(1, Kind::Bear, &rec);
        let knight = creature(2, Kind::Knight, &rec);

        let queue = Arc::new(FightQueue::new());
        let s = FightScheduler::with_referee(
            queue.clone(),
            Flaky { failures: AtomicU32::new(1) },
            &ArenaConfig::default(),
        );
        queue.push(FightEvent::new(orc.clone(), bear.clone()));
        queue.push(FightEvent::new(knight.clone(), orc.clone()));

        // First event fails and moves behind the second.
        assert_eq!(s.process_next(), Step::Requeued { retries: 1 });
        assert!(rec.calls().is_empty());
        assert_eq!(queue.len(), 2);

        // Knight kills Orc; the re-queued Orc→Bear event is now stale.
        assert_eq!(s.process_next(), Step::Resolved { attacker_wins: true });
        assert!(!orc.is_alive());
        assert_eq!(s.process_next(), Step::Dropped);
        assert!(bear.is_alive());
        assert_eq!(s.stats().snapshot().requeued, 1);
    }

    #[test]
    fn retries_are_unbounded() {
        let rec = Arc::new(Recorder::default());
        let orc = creature(0, Kind::Orc, &rec);
        let bear = creature(1, Kind::Bear, &rec);
        let queue = Arc::new(FightQueue::new());
        let config = ArenaConfig { retry_warn_threshold: Some(10), ..ArenaConfig::default() };
        let s = FightScheduler::with_referee(
            queue.clone(),
            Flaky { failures: AtomicU32::new(100) },
            &config,
        );
        queue.push(FightEvent::new(orc, bear.clone()));

        for i in 1..=100 {
            assert_eq!(s.process_next(), Step::Requeued { retries: i });
        }
        assert_eq!(s.process_next(), Step::Resolved { attacker_wins: true });
        assert!(!bear.is_alive());
        assert_eq!(rec.calls().len(), 1);
    }

    #[test]
    fn permanent_error_drops_event() {
        let rec = Arc::new(Recorder::default());
        let orc = creature(0, Kind::Orc, &rec);
        let bear = creature(1, Kind::Bear, &rec);
        let queue = Arc::new(FightQueue::new());
        let s = FightScheduler::with_referee(queue.clone(), Refuses, &ArenaConfig::default());
        queue.push(FightEvent::new(orc, bear.clone()));

        assert_eq!(s.process_next(), Step::Dropped);
        assert!(queue.is_empty());
        assert!(bear.is_alive());
    }

    #[test]
    fn zero_warn_threshold_means_no_warning() {
        let rec = Arc::new(Recorder::default());
        let orc = creature(0, Kind::Orc, &rec);
        let bear = creature(1, Kind::Bear, &rec);
        let queue = Arc::new(FightQueue::new());
        let config = ArenaConfig { retry_warn_threshold: Some(0), ..ArenaConfig::default() };
        let s = FightScheduler::with_referee(
            queue.clone(),
            Flaky { failures: AtomicU32::new(3) },
            &config,
        );
        queue.push(FightEvent::new(orc, bear.clone()));

        for i in 1..=3 {
            assert_eq!(s.process_next(), Step::Requeued { retries: i });
        }
        assert_eq!(s.process_next(), Step::Resolved { attacker_wins: true });
        assert!(!bear.is_alive());
    }

    #[test]
    fn busy_defender_is_retried_at_tail() {
        use std::sync::mpsc;
        use std::thread;

        let rec = Arc::new(Recorder::default());
        let orc = creature(0, Kind::Orc, &rec);
        let bear = creature(1, Kind::Bear, &rec);
        let lancelot = creature(2, Kind::Knight, &rec);
        let gawain = creature(3, Kind::Knight, &rec);

        let s = scheduler();
        let contested = FightEvent::new(orc.clone(), bear.clone());
        s.queue().push(contested.clone());
        s.queue().push(FightEvent::new(lancelot, gawain));

        thread::scope(|scope| {
            let (held_tx, held_rx) = mpsc::channel();
            let (release_tx, release_rx) = mpsc::channel::<()>();
            let holder = &bear;
            scope.spawn(move || {
                let _guard = holder.hold();
                held_tx.send(()).unwrap();
                let _ = release_rx.recv();
            });
            held_rx.recv().unwrap();

            assert!(bear.try_snapshot().is_none());
            let err = crate::TableReferee.judge(&contested).unwrap_err();
            assert!(err.is_transient());
            assert!(matches!(err, CombatError::Contended { id: CreatureId(1), .. }));

            assert_eq!(s.process_next(), Step::Requeued { retries: 1 });
            assert_eq!(s.queue().len(), 2);
            assert!(rec.calls().is_empty());

            release_tx.send(()).unwrap();
        });

        // The knights' draw was behind the contested event; now it is ahead.
        assert_eq!(s.process_next(), Step::Resolved { attacker_wins: false });
        assert_eq!(rec.calls()[0].0, CreatureId(2));
        assert_eq!(s.process_next(), Step::Resolved { attacker_wins: true });
        assert!(!bear.is_alive());
        assert_eq!(s.stats().snapshot().requeued, 1);
    }

    #[test]
    fn table_referee_verdicts() {
        let rec = Arc::new(Recorder::default());
        let orc = creature(0, Kind::Orc, &rec);
        let bear = creature(1, Kind::Bear, &rec);
        let event = FightEvent::new(orc.clone(), bear.clone());
        let reverse = FightEvent::new(bear.clone(), orc.clone());

        assert_eq!(crate::TableReferee.judge(&event).unwrap(), Verdict::Decided(true));
        assert_eq!(crate::TableReferee.judge(&reverse).unwrap(), Verdict::Decided(false));

        bear.kill();
        assert_eq!(crate::TableReferee.judge(&event).unwrap(), Verdict::Stale);
        assert!(rec.calls().is_empty(), "referee must not notify");
    }
}

// ── Concurrency ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod concurrency_tests {
    use std::sync::atomic::AtomicBool;
    use std::thread;
    use std::time::{Duration, Instant};

    use super::*;
    use crate::resolve;

    #[test]
    fn thousand_disjoint_fights_resolve_without_lost_updates() {
        const PAIRS: u32 = 1_000;
        const SUBMITTERS: u32 = 4;

        let rec = Arc::new(Recorder::default());
        let pairs: Vec<(Arc<Creature>, Arc<Creature>)> = (0..PAIRS)
            .map(|i| {
                let a = Kind::ALL[(i % 3) as usize];
                let d = Kind::ALL[((i / 3) % 3) as usize];
                (creature(2 * i, a, &rec), creature(2 * i + 1, d, &rec))
            })
            .collect();
        let pairs = Arc::new(pairs);

        let config = ArenaConfig { poll_interval_ms: 1, ..ArenaConfig::default() };
        let s = Arc::new(FightScheduler::new(Arc::new(FightQueue::new()), &config));
        let shutdown = Arc::new(AtomicBool::new(false));

        let worker = {
            let s = Arc::clone(&s);
            let shutdown = Arc::clone(&shutdown);
            thread::spawn(move || s.run(&shutdown))
        };

        let submitters: Vec<_> = (0..SUBMITTERS)
            .map(|t| {
                let pairs = Arc::clone(&pairs);
                let queue = Arc::clone(s.queue());
                thread::spawn(move || {
                    for (a, d) in pairs.iter().skip(t as usize).step_by(SUBMITTERS as usize) {
                        queue.push(FightEvent::new(a.clone(), d.clone()));
                    }
                })
            })
            .collect();
        for h in submitters {
            h.join().unwrap();
        }

        let stats = s.stats();
        let deadline = Instant::now() + Duration::from_secs(30);
        while stats.snapshot().resolved < PAIRS as u64 {
            assert!(Instant::now() < deadline, "worker stalled: {:?}", stats.snapshot());
            thread::sleep(Duration::from_millis(5));
        }
        shutdown.store(true, Ordering::Release);
        assert_eq!(worker.join().unwrap(), 0);

        for (a, d) in pairs.iter() {
            let wins = resolve(a.kind(), d.kind());
            assert!(a.is_alive(), "attacker {} died", a.name());
            assert_eq!(d.is_alive(), !wins, "{} vs {}", a.kind(), d.kind());
        }
        let expected_kills = pairs.iter().filter(|(a, d)| resolve(a.kind(), d.kind())).count();
        assert_eq!(stats.snapshot().kills, expected_kills as u64);
        assert_eq!(rec.calls().len(), PAIRS as usize);
    }

    #[test]
    fn worker_exits_promptly_and_discards_queue() {
        let rec = Arc::new(Recorder::default());
        let knight = creature(0, Kind::Knight, &rec);
        let s = Arc::new(scheduler());
        let shutdown = Arc::new(AtomicBool::new(true));
        s.queue().push(FightEvent::new(knight.clone(), knight.clone()));

        let worker = {
            let s = Arc::clone(&s);
            let shutdown = Arc::clone(&shutdown);
            thread::spawn(move || s.run(&shutdown))
        };
        assert_eq!(worker.join().unwrap(), 1);
        assert!(rec.calls().is_empty());
    }
}
