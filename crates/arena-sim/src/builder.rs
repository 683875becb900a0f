//! Fluent builder for constructing an [`Arena`].

use std::collections::HashSet;
use std::sync::Arc;

use arena_combat::{FightQueue, FightScheduler, Referee, TableReferee};
use arena_core::{ArenaConfig, ArenaRng};
use arena_creature::Creature;

use crate::{Arena, Mover, SimError, SimResult};

/// Fluent builder for [`Arena<R>`].
///
/// # Required inputs
///
/// - [`ArenaConfig`]: field bounds, kill distance, periods, seed
///
/// # Optional inputs (have defaults)
///
/// | Method            | Default                 |
/// |-------------------|-------------------------|
/// | `.creatures(v)`   | Empty roster            |
/// | `.creature(c)`    | Appends one creature    |
/// | `.referee(r)`     | [`TableReferee`]        |
///
/// # Example
///
/// ```rust,ignore
/// let mut factory = CreatureFactory::new(config.seed).with_observer(log);
/// let roster = (0..10).map(|_| factory.spawn_random(Kind::Orc, config.bounds())).collect();
/// let arena = ArenaBuilder::new(config).creatures(roster).build()?;
/// let running = arena.start()?;
/// ```
pub struct ArenaBuilder<R: Referee = TableReferee> {
    config:    ArenaConfig,
    creatures: Vec<Arc<Creature>>,
    referee:   R,
}

impl ArenaBuilder<TableReferee> {
    pub fn new(config: ArenaConfig) -> Self {
        Self {
            config,
            creatures: Vec::new(),
            referee:   TableReferee,
        }
    }
}

impl<R: Referee> ArenaBuilder<R> {
    /// Append `creatures` to the roster.  Roster order fixes attacker/defender
    /// roles: the earlier creature of a close pair attacks.
    pub fn creatures(mut self, creatures: impl IntoIterator<Item = Arc<Creature>>) -> Self {
        self.creatures.extend(creatures);
        self
    }

    pub fn creature(mut self, creature: Arc<Creature>) -> Self {
        self.creatures.push(creature);
        self
    }

    /// Replace the referee used by the fight worker.
    pub fn referee<R2: Referee>(self, referee: R2) -> ArenaBuilder<R2> {
        ArenaBuilder {
            config:    self.config,
            creatures: self.creatures,
            referee,
        }
    }

    /// Validate inputs and return an arena ready to [`start`](Arena::start)
    /// or [`step`](Arena::step).
    pub fn build(self) -> SimResult<Arena<R>> {
        self.config.validate()?;

        let bounds = self.config.bounds();
        let mut seen = HashSet::with_capacity(self.creatures.len());
        for c in &self.creatures {
            if !seen.insert(c.id()) {
                return Err(SimError::DuplicateId(c.id()));
            }
            let position = c.position();
            if !bounds.contains(position) {
                return Err(SimError::OutOfBounds { name: c.name().to_owned(), position });
            }
        }

        let creatures: Arc<[Arc<Creature>]> = self.creatures.into();
        let queue = Arc::new(FightQueue::new());

        // Offset 0 is left for callers that derive their own RNGs from the seed.
        let mut root = ArenaRng::new(self.config.seed);
        let mover = Mover::new(
            Arc::clone(&creatures),
            Arc::clone(&queue),
            &self.config,
            root.child(1),
        );
        let scheduler = FightScheduler::with_referee(queue, self.referee, &self.config);

        Ok(Arena {
            config: self.config,
            creatures,
            mover,
            scheduler,
        })
    }
}
