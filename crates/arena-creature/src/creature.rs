//! `Creature` — one simulated creature.
//!
//! # Locking
//!
//! Identity (`id`, `kind`, `name`) is immutable and read without locking.
//! Everything that changes (position, liveness, subscribed observers) lives
//! in a single `Mutex<CreatureState>`:
//!
//! - every read or write of mutable state takes the lock, so no caller ever
//!   sees a torn `(x, y)` pair;
//! - the lock is never held while another creature's lock is taken
//!   ([`is_close`](Creature::is_close) snapshots the other side first);
//! - the lock is never held across an observer callback
//!   ([`notify`](Creature::notify) clones the observer list, then releases).
//!
//! A poisoned mutex is recovered rather than propagated: the state is plain
//! data and every update leaves it consistent.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, TryLockError};

use arena_core::{Bounds, CreatureId, Kind, Position};

use crate::FightObserver;

struct CreatureState {
    position:  Position,
    alive:     bool,
    observers: Vec<Arc<dyn FightObserver>>,
}

/// A coherent view of a creature's mutable state, taken under one lock.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub position: Position,
    pub alive:    bool,
}

/// Keeps a creature's state locked until dropped.  See [`Creature::hold`].
#[cfg(any(test, feature = "test-support"))]
pub struct StateGuard<'a>(#[allow(dead_code)] MutexGuard<'a, CreatureState>);

/// One creature on the field.
///
/// Shared as `Arc<Creature>` between the arena roster and any queued fight
/// events.  Create through [`CreatureFactory`][crate::CreatureFactory] so
/// the ambient observers are subscribed.
pub struct Creature {
    id:    CreatureId,
    kind:  Kind,
    name:  String,
    state: Mutex<CreatureState>,
}

impl Creature {
    /// A living creature at `position` with no observers.
    pub fn new(id: CreatureId, kind: Kind, position: Position, name: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            name: name.into(),
            state: Mutex::new(CreatureState {
                position,
                alive: true,
                observers: Vec::new(),
            }),
        }
    }

    #[inline]
    pub fn id(&self) -> CreatureId {
        self.id
    }

    #[inline]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    fn lock(&self) -> MutexGuard<'_, CreatureState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn position(&self) -> Position {
        self.lock().position
    }

    pub fn snapshot(&self) -> Snapshot {
        let state = self.lock();
        Snapshot { position: state.position, alive: state.alive }
    }

    /// Take the state lock and keep it until the guard drops, so tests can
    /// stage contention for [`try_snapshot`](Self::try_snapshot).
    #[cfg(any(test, feature = "test-support"))]
    pub fn hold(&self) -> StateGuard<'_> {
        StateGuard(self.lock())
    }

    /// Like [`snapshot`](Self::snapshot) but never blocks.
    ///
    /// Returns `None` if another thread currently holds the lock.
    pub fn try_snapshot(&self) -> Option<Snapshot> {
        let state = match self.state.try_lock() {
            Ok(guard) => guard,
            Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner(),
            Err(TryLockError::WouldBlock) => return None,
        };
        Some(Snapshot { position: state.position, alive: state.alive })
    }

    /// Move one fixed step along each axis.
    ///
    /// Only the sign of each shift matters (`>= 0` is positive); the distance
    /// is always [`Kind::step`].  An axis whose new value would leave
    /// `[0, bound]` stays where it is; the other axis still moves.  Dead
    /// creatures do not move.
    pub fn shift(&self, shift_x: i32, shift_y: i32, bounds: Bounds) {
        let step = self.kind.step();
        let dx = if shift_x >= 0 { step } else { -step };
        let dy = if shift_y >= 0 { step } else { -step };

        let mut state = self.lock();
        if !state.alive {
            return;
        }
        let x = state.position.x.saturating_add(dx);
        if bounds.contains_x(x) {
            state.position.x = x;
        }
        let y = state.position.y.saturating_add(dy);
        if bounds.contains_y(y) {
            state.position.y = y;
        }
    }

    /// `true` if `other` is within `distance` of `self` (inclusive).
    pub fn is_close(&self, other: &Creature, distance: u32) -> bool {
        // Other side first, released before our own lock is taken.
        let theirs = other.position();
        self.lock().position.within(theirs, distance)
    }

    pub fn is_alive(&self) -> bool {
        self.lock().alive
    }

    /// Mark the creature dead.  Terminal and idempotent.
    ///
    /// Returns `true` if this call performed the transition.
    pub fn kill(&self) -> bool {
        let mut state = self.lock();
        std::mem::replace(&mut state.alive, false)
    }

    pub fn subscribe(&self, observer: Arc<dyn FightObserver>) {
        self.lock().observers.push(observer);
    }

    pub fn observer_count(&self) -> usize {
        self.lock().observers.len()
    }

    /// Report a fight in which `self` attacked `defender` to every subscribed
    /// observer, in subscription order.
    pub fn notify(&self, defender: &Creature, won: bool) {
        let observers = self.lock().observers.clone();
        for observer in &observers {
            observer.on_fight(self, defender, won);
        }
    }
}

impl fmt::Display for Creature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pos = self.position();
        write!(
            f,
            "{} {}: {{ x:{}, y:{}, name:\"{}\"}}",
            self.kind, self.name, pos.x, pos.y, self.name
        )
    }
}

impl fmt::Debug for Creature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let snap = self.snapshot();
        f.debug_struct("Creature")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("name", &self.name)
            .field("position", &snap.position)
            .field("alive", &snap.alive)
            .finish()
    }
}
