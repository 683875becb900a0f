//! `arena-creature` — the entity model of the arena simulation.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`creature`] | `Creature` (lock-protected position/liveness), `Snapshot`  |
//! | [`observer`] | `FightObserver` — the notification interface               |
//! | [`record`]   | `CreatureRecord`, `RecordReader`, `write_record`           |
//! | [`factory`]  | `CreatureFactory`, `Roster`                                |
//! | [`names`]    | Per-kind random name pools                                 |
//!
//! Creatures are always handled as `Arc<Creature>`: the arena's roster and
//! every in-flight fight event share ownership, and all mutation goes through
//! the creature's own mutex.

pub mod creature;
pub mod error;
pub mod factory;
pub mod names;
pub mod observer;
pub mod record;


pub use creature::{Creature, Snapshot};
#[cfg(any(test, feature = "test-support"))]
pub use creature::StateGuard;
pub use error::{RecordError, RecordResult};
pub use factory::{CreatureFactory, Roster, save_roster};
pub use observer::FightObserver;
pub use record::{CreatureRecord, RecordReader, write_record};
