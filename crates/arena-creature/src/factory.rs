//! `CreatureFactory` — the only place creatures are born.
//!
//! The factory owns the observer set every new creature is subscribed to, so
//! there are no process-wide observer singletons: whoever builds the factory
//! decides where fight reports go.

use std::io::{BufRead, Write};
use std::sync::Arc;

use arena_core::{ArenaRng, Bounds, CreatureId, Kind, Position};
use tracing::{debug, warn};

use crate::names::random_name;
use crate::record::{CreatureRecord, RecordReader, write_record};
use crate::{Creature, FightObserver, RecordError, RecordResult};

/// The outcome of [`CreatureFactory::load`].
#[derive(Debug, Default)]
pub struct Roster {
    /// Creatures built from well-formed records, in input order.
    pub creatures: Vec<Arc<Creature>>,
    /// One entry per rejected record.  Rejected records yield no creature.
    pub rejected: Vec<RecordError>,
}

/// Builds creatures, assigns ids, fills in missing names, and subscribes the
/// ambient observers.
///
/// # Example
///
/// ```rust
/// use arena_core::{Bounds, Kind, Position};
/// use arena_creature::CreatureFactory;
///
/// let mut factory = CreatureFactory::new(42);
/// let grom = factory.spawn(Kind::Orc, Position::new(10, 10), Some("Grom"));
/// let rando = factory.spawn_random(Kind::Bear, Bounds::new(500, 500));
///
/// assert_eq!(grom.name(), "Grom");
/// assert!(!rando.name().is_empty());
/// ```
pub struct CreatureFactory {
    observers: Vec<Arc<dyn FightObserver>>,
    next_id:   CreatureId,
    rng:       ArenaRng,
}

impl CreatureFactory {
    /// A factory with no observers.  `seed` drives random names and positions.
    pub fn new(seed: u64) -> Self {
        Self {
            observers: Vec::new(),
            next_id:   CreatureId(0),
            rng:       ArenaRng::new(seed),
        }
    }

    /// Subscribe `observer` to every creature created from now on.
    pub fn with_observer(mut self, observer: Arc<dyn FightObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Create a creature at `position`.  An absent or empty `name` is replaced
    /// by a random one from the kind's pool.
    pub fn spawn(&mut self, kind: Kind, position: Position, name: Option<&str>) -> Arc<Creature> {
        let name = match name.map(str::trim) {
            Some(n) if !n.is_empty() => n.to_owned(),
            _ => random_name(kind, &mut self.rng).to_owned(),
        };

        let id = self.next_id;
        self.next_id = id.next();

        let creature = Creature::new(id, kind, position, name);
        for observer in &self.observers {
            creature.subscribe(Arc::clone(observer));
        }
        debug!(%id, %kind, name = creature.name(), %position, "creature spawned");
        Arc::new(creature)
    }

    /// Create a creature at a uniformly random position inside `bounds`.
    pub fn spawn_random(&mut self, kind: Kind, bounds: Bounds) -> Arc<Creature> {
        let x = self.rng.gen_range(0..=bounds.max_x);
        let y = self.rng.gen_range(0..=bounds.max_y);
        self.spawn(kind, Position::new(x, y), None)
    }

    pub fn from_record(&mut self, record: CreatureRecord) -> Arc<Creature> {
        self.spawn(record.kind, record.position, Some(record.name.as_str()))
    }

    /// Read every record from `reader`.
    ///
    /// Unknown kinds and malformed records are logged, collected in
    /// [`Roster::rejected`], and skipped.  An I/O error aborts the load.
    pub fn load<R: BufRead>(&mut self, reader: R) -> RecordResult<Roster> {
        let mut roster = Roster::default();
        let mut records = RecordReader::new(reader);
        loop {
            match records.next_record() {
                Ok(Some(record)) => roster.creatures.push(self.from_record(record)),
                Ok(None) => break,
                Err(e) if e.is_recoverable() => {
                    warn!(error = %e, "roster record rejected");
                    roster.rejected.push(e);
                }
                Err(e) => return Err(e),
            }
        }
        Ok(roster)
    }
}

/// Write every creature in `creatures` as one record each.
pub fn save_roster<W: Write>(creatures: &[Arc<Creature>], mut out: W) -> RecordResult<()> {
    for creature in creatures {
        write_record(&CreatureRecord::of(creature), &mut out)?;
    }
    out.flush()?;
    Ok(())
}
